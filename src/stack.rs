//! The fixed voicechat2 service stack: which tmux windows to create, in what
//! order, and the command line typed into each one.

use crate::config::Config;

/// The tmux session everything runs in. Also the window name reused by the
/// first two services.
pub const SESSION_NAME: &str = "voicechat2";

/// One window to create plus the command submitted into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub name: &'static str,
    pub command: String,
}

/// Build the four-window launch plan, in bring-up order: API gateway, speech
/// recognition, LLM inference, speech synthesis.
///
/// The gateway and speech-recognition windows both reuse the session name.
/// tmux allows duplicate window names; submission targets window ids, so the
/// pair stays unambiguous.
pub fn stack_windows(config: &Config) -> Vec<WindowSpec> {
    vec![
        WindowSpec {
            name: SESSION_NAME,
            command: gateway_command(),
        },
        WindowSpec {
            name: SESSION_NAME,
            command: speech_recognition_command(),
        },
        WindowSpec {
            name: "llm",
            command: llm_command(config),
        },
        WindowSpec {
            name: "tts",
            command: tts_command(),
        },
    ]
}

/// WebSocket gateway that brokers audio between browser clients and the
/// inference servers.
fn gateway_command() -> String {
    "uvicorn voicechat2:app --host 0.0.0.0 --port 8000".into()
}

/// whisper.cpp transcription server. The model path is part of the fixed
/// command; only the llama.cpp window reads config.
fn speech_recognition_command() -> String {
    "cd whisper.cpp && ./server --host 0.0.0.0 --port 8005 -m models/ggml-large-v3-q5_0.bin".into()
}

/// llama.cpp chat-completion server. Model path and context size are
/// interpolated verbatim, unquoted; a path with spaces breaks inside the
/// window, not here.
fn llm_command(config: &Config) -> String {
    format!(
        "cd llama.cpp && ./llama-server --host 127.0.0.1 --port 8002 -m {} -ngl 99 -c {}",
        config.llm.model, config.llm.context_size
    )
}

/// Text-to-speech server.
fn tts_command() -> String {
    "uvicorn tts_server:app --host 0.0.0.0 --port 8003".into()
}
