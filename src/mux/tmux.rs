//! tmux CLI transport.
//!
//! Every operation shells out to the `tmux` binary with an argv array; no
//! intermediate shell, so command text reaches `send-keys -l` byte-for-byte.

use super::{Multiplexer, WindowId};
use crate::error::MuxError;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of one tmux invocation.
struct TmuxOutput {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

/// The real tmux transport. Constructed through [`TmuxMux::detect`] so a
/// missing binary is caught before any session work starts.
pub struct TmuxMux;

impl TmuxMux {
    /// Probe `tmux -V`. A binary that spawns at all passes; only
    /// `ErrorKind::NotFound` means tmux is absent.
    pub async fn detect() -> Result<Self, MuxError> {
        match Command::new("tmux").arg("-V").output().await {
            Ok(output) => {
                tracing::debug!(
                    version = %String::from_utf8_lossy(&output.stdout).trim(),
                    "tmux detected"
                );
                Ok(Self)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(MuxError::ToolMissing),
            Err(e) => Err(MuxError::Spawn(format!("tmux -V: {e}"))),
        }
    }
}

#[async_trait]
impl Multiplexer for TmuxMux {
    async fn ensure_session(&self, session: &str) -> Result<(), MuxError> {
        let probe = run_tmux(&has_session_args(session)).await?;
        if probe.exit_code == 0 {
            tracing::debug!(session, "session exists, reusing");
            return Ok(());
        }
        // Covers both "no such session" and "server not running":
        // new-session starts the server when needed.
        tracing::debug!(session, "creating session");
        ensure_success(run_tmux(&new_session_args(session)).await?, "tmux new-session")?;
        Ok(())
    }

    async fn create_window(&self, session: &str, name: &str) -> Result<WindowId, MuxError> {
        let output = ensure_success(
            run_tmux(&new_window_args(session, name)).await?,
            "tmux new-window",
        )?;
        let id = output.stdout.trim();
        if id.is_empty() {
            return Err(MuxError::CommandFailed {
                action: "tmux new-window".into(),
                details: "no window id reported".into(),
            });
        }
        tracing::debug!(window = id, name, "window created");
        Ok(WindowId(id.to_string()))
    }

    async fn submit_command(&self, window: &WindowId, text: &str) -> Result<(), MuxError> {
        ensure_success(
            run_tmux(&send_text_args(window, text)).await?,
            "tmux send-keys",
        )?;
        ensure_success(
            run_tmux(&send_enter_args(window)).await?,
            "tmux send-keys Enter",
        )?;
        tracing::debug!(window = %window, "command submitted");
        Ok(())
    }

    async fn attach(&self, session: &str) -> Result<(), MuxError> {
        let mut cmd = Command::new("tmux");
        cmd.args(attach_args(session));
        // The attach owns the terminal until detach. Its exit status carries
        // nothing the launcher acts on.
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        let status = cmd
            .status()
            .await
            .map_err(|e| MuxError::Spawn(format!("tmux attach-session: {e}")))?;
        tracing::debug!(code = ?status.code(), "attach returned");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Process plumbing
// ---------------------------------------------------------------------------

/// Spawn tmux with the given argv and capture its output.
async fn run_tmux(args: &[String]) -> Result<TmuxOutput, MuxError> {
    let mut cmd = Command::new("tmux");
    // Dropped futures must not leak tmux child processes.
    cmd.kill_on_drop(true);
    cmd.args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let action = args.first().map(String::as_str).unwrap_or("tmux");
    let child = cmd.spawn().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => MuxError::ToolMissing,
        _ => MuxError::Spawn(format!("tmux {action}: {e}")),
    })?;

    let output = child
        .wait_with_output()
        .await
        .map_err(|e| MuxError::Spawn(format!("tmux {action}: {e}")))?;

    Ok(TmuxOutput {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    })
}

/// Convert a non-zero tmux exit into a contextual error.
fn ensure_success(output: TmuxOutput, action: &str) -> Result<TmuxOutput, MuxError> {
    if output.exit_code == 0 {
        return Ok(output);
    }

    let mut details = if output.stderr.trim().is_empty() {
        output.stdout.trim().to_string()
    } else {
        output.stderr.trim().to_string()
    };
    if details.is_empty() {
        details = format!("command exited with {}", output.exit_code);
    }

    Err(MuxError::CommandFailed {
        action: action.into(),
        details,
    })
}

// ---------------------------------------------------------------------------
// Argv builders
// ---------------------------------------------------------------------------

fn has_session_args(session: &str) -> Vec<String> {
    vec!["has-session".into(), "-t".into(), session.into()]
}

fn new_session_args(session: &str) -> Vec<String> {
    vec!["new-session".into(), "-d".into(), "-s".into(), session.into()]
}

/// `-P -F '#{window_id}'` prints the created id on stdout. No `-d`: each new
/// window becomes current, so the terminal lands on the last one at attach.
fn new_window_args(session: &str, name: &str) -> Vec<String> {
    vec![
        "new-window".into(),
        "-t".into(),
        session.into(),
        "-n".into(),
        name.into(),
        "-P".into(),
        "-F".into(),
        "#{window_id}".into(),
    ]
}

/// `-l` sends the text as literal keystrokes instead of key names.
fn send_text_args(window: &WindowId, text: &str) -> Vec<String> {
    vec![
        "send-keys".into(),
        "-l".into(),
        "-t".into(),
        window.0.clone(),
        text.into(),
    ]
}

/// Enter must go as a separate non-literal send so tmux interprets the key.
fn send_enter_args(window: &WindowId) -> Vec<String> {
    vec![
        "send-keys".into(),
        "-t".into(),
        window.0.clone(),
        "Enter".into(),
    ]
}

fn attach_args(session: &str) -> Vec<String> {
    vec!["attach-session".into(), "-t".into(), session.into()]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
