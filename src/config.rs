//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`VCLAUNCH_MODEL`, `VCLAUNCH_CONTEXT_SIZE`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./vclaunch.toml in the current directory
//! 4. $XDG_CONFIG_HOME/vclaunch/vclaunch.toml (or ~/.config/vclaunch/vclaunch.toml)
//! 5. Built-in defaults

use crate::error::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default chat-model file handed to the llama.cpp server, relative to the
/// llama.cpp checkout the LLM window starts in.
pub const DEFAULT_MODEL: &str = "models/Meta-Llama-3.1-8B-Instruct-Q4_K_M.gguf";

/// Default llama.cpp context window size.
pub const DEFAULT_CONTEXT_SIZE: u32 = 8192;

// ---------------------------------------------------------------------------
// Data model
// ---------------------------------------------------------------------------

/// Settings for the LLM inference window, stored under `[llm]`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LlmConfig {
    /// Model file passed to `llama-server -m`. Substituted into the launch
    /// command verbatim; quoting is the operator's problem.
    pub model: String,
    /// Context window size passed to `llama-server -c`.
    pub context_size: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            context_size: DEFAULT_CONTEXT_SIZE,
        }
    }
}

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub llm: LlmConfig,
}

/// On-disk layout of `vclaunch.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileConfig {
    llm: LlmConfig,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let config_text = read_config_text(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = Config { llm: parsed.llm };
    apply_env_overrides(&mut config, &env_lookup)?;
    Ok(config)
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<String, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(p) = path_override {
        // An explicit --config path must exist; everything below is optional.
        return Ok(read_file(Path::new(p))?);
    }

    if let Ok(text) = read_file(Path::new("vclaunch.toml")) {
        return Ok(text);
    }
    if let Some(dir) = config_root() {
        let global = dir.join("vclaunch").join("vclaunch.toml");
        if let Ok(text) = read_file(&global) {
            return Ok(text);
        }
    }

    Ok(String::new())
}

fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(model) = env_lookup("VCLAUNCH_MODEL") {
        config.llm.model = model;
    }
    if let Some(size) = env_lookup("VCLAUNCH_CONTEXT_SIZE") {
        let parsed = size.parse::<u32>().map_err(|_| {
            ConfigError::Invalid(format!(
                "invalid VCLAUNCH_CONTEXT_SIZE value `{size}`: expected a positive integer"
            ))
        })?;
        config.llm.context_size = parsed;
    }
    Ok(())
}

/// Resolve the root directory that holds per-user config
/// (`$XDG_CONFIG_HOME`, falling back to `~/.config`).
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
