//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "QUICKSWITCH_CONFIG";

/// Environment variable overriding the debounce interval in milliseconds.
pub const DEBOUNCE_ENV: &str = "QUICKSWITCH_DEBOUNCE_MS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/quickswitch/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Quiet interval before a search runs, in milliseconds.
    #[serde(default)]
    pub debounce_ms: Option<u64>,

    /// Result rows visible in the overlay.
    #[serde(default)]
    pub visible_rows: Option<u16>,

    /// Overlay width as a percentage of the terminal width.
    #[serde(default)]
    pub width_percent: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Extra user ids to present as bots.
    #[serde(default)]
    pub bot_user_ids: Option<Vec<String>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Debounce quiet interval in milliseconds.
    pub debounce_ms: u64,
    /// Result rows visible in the overlay.
    pub visible_rows: u16,
    /// Overlay width percentage, 10..=100.
    pub width_percent: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Extra user ids to present as bots.
    pub bot_user_ids: Vec<String>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            visible_rows: 15,
            width_percent: 40,
            log_file_path: default_log_path(),
            bot_user_ids: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// Debounce quiet interval.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/quickswitch/quickswitch.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("quickswitch").join("quickswitch.log")
    } else {
        PathBuf::from("quickswitch.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/quickswitch/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("quickswitch").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `QUICKSWITCH_CONFIG` environment variable
/// 3. Default path `~/.config/quickswitch/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// default. Out-of-range layout values are clamped.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        debounce_ms: config.debounce_ms.unwrap_or(defaults.debounce_ms),
        visible_rows: config
            .visible_rows
            .unwrap_or(defaults.visible_rows)
            .max(1),
        width_percent: config
            .width_percent
            .unwrap_or(defaults.width_percent)
            .clamp(10, 100),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        bot_user_ids: config.bot_user_ids.unwrap_or(defaults.bot_user_ids),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `QUICKSWITCH_DEBOUNCE_MS`: Override debounce interval. Unparseable
///   values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(DEBOUNCE_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(ms) => config.debounce_ms = ms,
            Err(err) => warn!(value = %raw, %err, "Ignoring invalid {DEBOUNCE_ENV}"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    debounce_override: Option<u64>,
) -> ResolvedConfig {
    if let Some(ms) = debounce_override {
        config.debounce_ms = ms;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
