//! Terminal-multiplexer seam.
//!
//! The launcher only talks to [`Multiplexer`]; `tmux.rs` is the real CLI
//! transport and tests substitute a recording fake.

mod tmux;

pub use tmux::TmuxMux;

use crate::error::MuxError;
use async_trait::async_trait;
use std::fmt;

/// Opaque window handle as reported by the multiplexer at creation time.
///
/// Submissions target this id rather than the window name, so duplicate
/// names in one session stay unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowId(pub String);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session and window operations the launcher needs from a multiplexer.
#[async_trait]
pub trait Multiplexer: Send + Sync {
    /// Create the named session if it does not exist; reuse it when it does.
    async fn ensure_session(&self, session: &str) -> Result<(), MuxError>;

    /// Create a named window in the session and return its id.
    async fn create_window(&self, session: &str, name: &str) -> Result<WindowId, MuxError>;

    /// Type `text` into the window as literal keystrokes, then press Enter.
    /// Fire-and-forget: success means the keystrokes were delivered, not that
    /// the command inside the window succeeded.
    async fn submit_command(&self, window: &WindowId, text: &str) -> Result<(), MuxError>;

    /// Attach the controlling terminal to the session and block until the
    /// user detaches or the session ends.
    async fn attach(&self, session: &str) -> Result<(), MuxError>;
}
