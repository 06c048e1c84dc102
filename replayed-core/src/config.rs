//! Configuration loading and management
//!
//! Configuration is loaded from `~/.config/replayed/config.toml`
//!
//! This module follows the XDG Base Directory Specification:
//! - Config: `$XDG_CONFIG_HOME/replayed/` (~/.config/replayed/)
//! - State/Logs: `$XDG_STATE_HOME/replayed/` (~/.local/state/replayed/)

use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::PathBuf;

/// Returns a best-effort home directory path.
fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns XDG_CONFIG_HOME or ~/.config
fn xdg_config_home() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".config"))
}

/// Returns XDG_STATE_HOME or ~/.local/state
fn xdg_state_home() -> PathBuf {
    std::env::var("XDG_STATE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home_dir().join(".local/state"))
}

/// Main configuration struct
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    /// Report configuration (top-N list lengths)
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Top-N list lengths for the top-stats report.
///
/// Defaults match the fixed values the report has always used.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct ReportConfig {
    /// Entries in the Top Artists section
    #[serde(default = "default_top_artists")]
    pub top_artists: usize,

    /// Entries in the Top Songs section
    #[serde(default = "default_top_songs")]
    pub top_songs: usize,

    /// Entries in the Top Albums section
    #[serde(default = "default_top_albums")]
    pub top_albums: usize,

    /// Entries in the Top Skipped Songs section
    #[serde(default = "default_top_skipped")]
    pub top_skipped: usize,

    /// Entries in the Top Intentional Songs section
    #[serde(default = "default_top_intentional")]
    pub top_intentional: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            top_artists: default_top_artists(),
            top_songs: default_top_songs(),
            top_albums: default_top_albums(),
            top_skipped: default_top_skipped(),
            top_intentional: default_top_intentional(),
        }
    }
}

fn default_top_artists() -> usize {
    50
}

fn default_top_songs() -> usize {
    100
}

fn default_top_albums() -> usize {
    50
}

fn default_top_skipped() -> usize {
    10
}

fn default_top_intentional() -> usize {
    10
}

/// Logging configuration
#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from the default path
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            tracing::debug!("No config file found at {:?}, using defaults", config_path);
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config file {:?}: {}", path, e)))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;

        Ok(config)
    }

    /// Returns the default config file path
    ///
    /// `$XDG_CONFIG_HOME/replayed/config.toml` (~/.config/replayed/config.toml)
    pub fn config_path() -> PathBuf {
        xdg_config_home().join("replayed").join("config.toml")
    }

    /// Returns the state directory path (for logs)
    ///
    /// `$XDG_STATE_HOME/replayed/` (~/.local/state/replayed/)
    pub fn state_dir() -> PathBuf {
        xdg_state_home().join("replayed")
    }

    /// Returns the log file path
    ///
    /// `$XDG_STATE_HOME/replayed/replayed.log` (~/.local/state/replayed/replayed.log)
    pub fn log_path() -> PathBuf {
        Self::state_dir().join("replayed.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_report_config() {
        let config = Config::default();
        assert_eq!(config.report.top_artists, 50);
        assert_eq!(config.report.top_songs, 100);
        assert_eq!(config.report.top_albums, 50);
        assert_eq!(config.report.top_skipped, 10);
        assert_eq!(config.report.top_intentional, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[report]\ntop_songs = 25\n\n[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load_from(&file.path().to_path_buf()).unwrap();
        assert_eq!(config.report.top_songs, 25);
        assert_eq!(config.report.top_artists, 50);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "report = not valid").unwrap();

        let err = Config::load_from(&file.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
