//! CLI entry point for vclaunch.

mod cli;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vclaunch::config::load_config;
use vclaunch::launcher::launch_stack;
use vclaunch::mux::TmuxMux;
use vclaunch::render::Renderer;
use vclaunch::stack::{stack_windows, SESSION_NAME};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    let renderer = Renderer::new(!args.no_color);

    // Load config.
    let config = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Preflight: a missing tmux binary is the only failure checked before the
    // launch starts, and the only side effect it leaves is this message.
    let mux = match TmuxMux::detect().await {
        Ok(mux) => mux,
        Err(e) => {
            renderer.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let windows = stack_windows(&config);
    launch_stack(&mux, SESSION_NAME, &windows, &renderer).await;
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
