//! Terminal output renderer for launcher status lines.
//!
//! All launcher-facing chatter goes to stderr so stdout stays clean for
//! whatever the attached session prints.

use crossterm::style::{Color, Stylize};

/// Renders user-facing status lines, with optional ANSI color.
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Render the launch banner shown before any tmux work starts.
    pub fn banner(&self, session: &str) {
        if self.color {
            eprintln!(
                "{} {} bringing up the voicechat2 stack in tmux session {}",
                "•".with(Color::DarkGrey),
                "vclaunch".with(Color::Green).bold(),
                session.with(Color::White).bold(),
            );
        } else {
            eprintln!("• vclaunch bringing up the voicechat2 stack in tmux session {session}");
        }
    }

    /// Render one launched window as an indented detail line.
    pub fn window(&self, name: &str, command: &str) {
        if self.color {
            eprintln!("  {}: {command}", name.with(Color::White).bold());
        } else {
            eprintln!("  {name}: {command}");
        }
    }

    /// Render a plain informational line.
    pub fn info(&self, message: &str) {
        if self.color {
            eprintln!("{} {message}", "•".with(Color::DarkGrey));
        } else {
            eprintln!("• {message}");
        }
    }

    pub fn error(&self, message: &str) {
        if self.color {
            eprintln!("{} {message}", "error:".with(Color::Red).bold());
        } else {
            eprintln!("error: {message}");
        }
    }
}
