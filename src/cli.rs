//! CLI argument parsing via clap.

use clap::Parser;
use vclaunch::build_info;

/// Launch the voicechat2 voice-assistant stack in a tmux session.
#[derive(Debug, Parser)]
#[command(
    name = "vclaunch",
    version = build_info::cli_version_text(),
    after_help = build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./vclaunch.toml or
    /// ~/.config/vclaunch/vclaunch.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}
