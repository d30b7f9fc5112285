//! Sequential bring-up of the voicechat2 stack.

use crate::mux::Multiplexer;
use crate::render::Renderer;
use crate::stack::WindowSpec;

/// Bring up the stack: ensure the session, create each window and submit its
/// command, attach the terminal, then print the post-detach notice.
///
/// Everything after preflight is fire-and-forget. A failed operation is
/// reported as a warning and skipped, never retried; a service whose command
/// dies shows the failure in its own window scrollback, and the launcher does
/// not watch for it.
pub async fn launch_stack(
    mux: &dyn Multiplexer,
    session: &str,
    windows: &[WindowSpec],
    ui: &Renderer,
) {
    ui.banner(session);

    if let Err(e) = mux.ensure_session(session).await {
        tracing::warn!("Failed to ensure session {session}: {e}");
    }

    for spec in windows {
        tracing::debug!(window = spec.name, "launching");
        let window = match mux.create_window(session, spec.name).await {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Failed to create window {}: {e}", spec.name);
                continue;
            }
        };
        if let Err(e) = mux.submit_command(&window, &spec.command).await {
            tracing::warn!("Failed to deliver command to window {}: {e}", spec.name);
        }
        ui.window(spec.name, &spec.command);
    }

    if let Err(e) = mux.attach(session).await {
        tracing::warn!("Failed to attach to session {session}: {e}");
    }

    for line in detach_notice(session) {
        ui.info(&line);
    }
}

/// The two lines shown once the user detaches (or the attach fails).
pub fn detach_notice(session: &str) -> [String; 2] {
    [
        format!("voicechat2 stack keeps running in tmux session {session}"),
        format!("reattach with: tmux attach -t {session}"),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::MuxError;
    use crate::mux::WindowId;
    use crate::stack::{stack_windows, SESSION_NAME};
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Op {
        Ensure(String),
        Create(String, String),
        Submit(String, String),
        Attach(String),
    }

    /// Multiplexer fake that records every operation in call order.
    #[derive(Default)]
    struct RecordingMux {
        ops: StdMutex<Vec<Op>>,
        fail_ensure: bool,
        fail_create: Option<&'static str>,
    }

    impl RecordingMux {
        fn ops(&self) -> Vec<Op> {
            self.ops.lock().expect("ops lock").clone()
        }

        fn push(&self, op: Op) {
            self.ops.lock().expect("ops lock").push(op);
        }
    }

    #[async_trait]
    impl Multiplexer for RecordingMux {
        async fn ensure_session(&self, session: &str) -> Result<(), MuxError> {
            self.push(Op::Ensure(session.into()));
            if self.fail_ensure {
                return Err(MuxError::CommandFailed {
                    action: "tmux new-session".into(),
                    details: "server refused".into(),
                });
            }
            Ok(())
        }

        async fn create_window(&self, session: &str, name: &str) -> Result<WindowId, MuxError> {
            self.push(Op::Create(session.into(), name.into()));
            if self.fail_create == Some(name) {
                return Err(MuxError::CommandFailed {
                    action: "tmux new-window".into(),
                    details: "create window failed".into(),
                });
            }
            let created = self
                .ops()
                .iter()
                .filter(|op| matches!(op, Op::Create(..)))
                .count();
            Ok(WindowId(format!("@{created}")))
        }

        async fn submit_command(&self, window: &WindowId, text: &str) -> Result<(), MuxError> {
            self.push(Op::Submit(window.0.clone(), text.into()));
            Ok(())
        }

        async fn attach(&self, session: &str) -> Result<(), MuxError> {
            self.push(Op::Attach(session.into()));
            Ok(())
        }
    }

    fn quiet() -> Renderer {
        Renderer::new(false)
    }

    #[tokio::test]
    async fn full_launch_issues_operations_in_stack_order() {
        let mux = RecordingMux::default();
        let windows = stack_windows(&Config::default());
        launch_stack(&mux, SESSION_NAME, &windows, &quiet()).await;

        let ops = mux.ops();
        // ensure + four create/submit pairs + attach
        assert_eq!(ops.len(), 10, "got: {ops:?}");
        assert_eq!(ops[0], Op::Ensure("voicechat2".into()));
        assert_eq!(ops[1], Op::Create("voicechat2".into(), "voicechat2".into()));
        assert!(matches!(&ops[2], Op::Submit(_, text) if text.starts_with("uvicorn voicechat2:app")));
        assert_eq!(ops[3], Op::Create("voicechat2".into(), "voicechat2".into()));
        assert!(matches!(&ops[4], Op::Submit(_, text) if text.contains("whisper.cpp")));
        assert_eq!(ops[5], Op::Create("voicechat2".into(), "llm".into()));
        assert!(matches!(&ops[6], Op::Submit(_, text) if text.contains("llama-server")));
        assert_eq!(ops[7], Op::Create("voicechat2".into(), "tts".into()));
        assert!(matches!(&ops[8], Op::Submit(_, text) if text.contains("tts_server:app")));
        assert_eq!(ops[9], Op::Attach("voicechat2".into()));
    }

    #[tokio::test]
    async fn attach_happens_exactly_once_and_last() {
        let mux = RecordingMux::default();
        let windows = stack_windows(&Config::default());
        launch_stack(&mux, SESSION_NAME, &windows, &quiet()).await;

        let ops = mux.ops();
        let attaches = ops
            .iter()
            .filter(|op| matches!(op, Op::Attach(_)))
            .count();
        assert_eq!(attaches, 1);
        assert!(matches!(ops.last(), Some(Op::Attach(_))));
    }

    #[tokio::test]
    async fn submissions_target_created_window_ids() {
        // The first two windows share a name; ids keep them apart.
        let mux = RecordingMux::default();
        let windows = stack_windows(&Config::default());
        launch_stack(&mux, SESSION_NAME, &windows, &quiet()).await;

        let targets: Vec<String> = mux
            .ops()
            .iter()
            .filter_map(|op| match op {
                Op::Submit(id, _) => Some(id.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(targets, ["@1", "@2", "@3", "@4"]);
    }

    #[tokio::test]
    async fn window_failure_skips_its_submit_but_not_the_rest() {
        let mux = RecordingMux {
            fail_create: Some("llm"),
            ..RecordingMux::default()
        };
        let windows = stack_windows(&Config::default());
        launch_stack(&mux, SESSION_NAME, &windows, &quiet()).await;

        let ops = mux.ops();
        // The llm submit is missing; everything else still happens.
        assert_eq!(ops.len(), 9, "got: {ops:?}");
        assert_eq!(ops[5], Op::Create("voicechat2".into(), "llm".into()));
        assert_eq!(ops[6], Op::Create("voicechat2".into(), "tts".into()));
        assert!(matches!(ops.last(), Some(Op::Attach(_))));
    }

    #[tokio::test]
    async fn ensure_failure_does_not_stop_the_bring_up() {
        let mux = RecordingMux {
            fail_ensure: true,
            ..RecordingMux::default()
        };
        let windows = stack_windows(&Config::default());
        launch_stack(&mux, SESSION_NAME, &windows, &quiet()).await;

        let ops = mux.ops();
        let creates = ops
            .iter()
            .filter(|op| matches!(op, Op::Create(..)))
            .count();
        assert_eq!(creates, 4);
        assert!(matches!(ops.last(), Some(Op::Attach(_))));
    }

    #[test]
    fn detach_notice_names_session_and_reattach_command() {
        let [keeps_running, reattach] = detach_notice("voicechat2");
        assert!(keeps_running.contains("voicechat2"));
        assert_eq!(reattach, "reattach with: tmux attach -t voicechat2");
    }
}
