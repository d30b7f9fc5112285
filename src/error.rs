//! Unified error types for the launcher.

use std::fmt;

// ---------------------------------------------------------------------------
// MuxError
// ---------------------------------------------------------------------------

/// Errors from the terminal-multiplexer transport.
#[derive(Debug)]
pub enum MuxError {
    /// The tmux binary is not on PATH. The one condition checked up front.
    ToolMissing,
    /// The tmux binary exists but could not be spawned or awaited.
    Spawn(String),
    /// tmux ran and reported a non-zero exit for the given action.
    CommandFailed { action: String, details: String },
}

impl fmt::Display for MuxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToolMissing => {
                write!(f, "tmux is not installed. Install tmux and try again.")
            }
            Self::Spawn(msg) => write!(f, "failed to run tmux: {msg}"),
            Self::CommandFailed { action, details } => write!(f, "{action}: {details}"),
        }
    }
}

impl std::error::Error for MuxError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mux_error_tool_missing_names_the_tool() {
        let msg = MuxError::ToolMissing.to_string();
        assert!(msg.contains("tmux"), "got: {msg}");
        assert!(msg.contains("is not installed"), "got: {msg}");
    }

    #[test]
    fn mux_error_command_failed_display() {
        let e = MuxError::CommandFailed {
            action: "tmux new-window".into(),
            details: "create window failed".into(),
        };
        assert_eq!(e.to_string(), "tmux new-window: create window failed");
    }

    #[test]
    fn mux_error_spawn_display() {
        let e = MuxError::Spawn("tmux -V: permission denied".into());
        assert_eq!(
            e.to_string(),
            "failed to run tmux: tmux -V: permission denied"
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn config_error_invalid_message() {
        let e = ConfigError::Invalid("VCLAUNCH_CONTEXT_SIZE must be an integer".into());
        assert_eq!(
            e.to_string(),
            "invalid config: VCLAUNCH_CONTEXT_SIZE must be an integer"
        );
    }
}
