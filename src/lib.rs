//! vclaunch — bring up the voicechat2 voice-assistant stack in tmux.
//!
//! This crate starts the four voicechat2 services (WebSocket API gateway,
//! whisper.cpp speech recognition, llama.cpp inference, text-to-speech) in
//! named windows of a single tmux session, then attaches the terminal so
//! every service's output stays one window away.
//!
//! # Quick start
//!
//! ```no_run
//! use vclaunch::config::load_config;
//! use vclaunch::launcher::launch_stack;
//! use vclaunch::mux::TmuxMux;
//! use vclaunch::render::Renderer;
//! use vclaunch::stack::{stack_windows, SESSION_NAME};
//!
//! # async fn example() {
//! let config = load_config(None).unwrap();
//! let mux = TmuxMux::detect().await.unwrap();
//! let windows = stack_windows(&config);
//! launch_stack(&mux, SESSION_NAME, &windows, &Renderer::new(true)).await;
//! # }
//! ```

pub mod build_info;
pub mod config;
pub mod error;
pub mod launcher;
pub mod mux;
pub mod render;
pub mod stack;
