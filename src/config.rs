use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default log level when neither the environment nor the config sets one
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV_VAR: &str = "VERSION_SCRAPE_LOG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrapeConfig {
    /// Program name stripped from the start of every input
    pub program_name: Option<String>,
    /// Whether pre-releases are reported next to stable releases
    pub include_prereleases: bool,
    pub log: LogConfig,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            program_name: None,
            include_prereleases: true,
            log: LogConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ScrapeConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Load `path`, falling back to defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Returns the path to the config directory for version-scrape.
/// Uses $XDG_CONFIG_HOME/version-scrape if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/version-scrape,
/// or ./version-scrape if neither is available.
pub fn config_dir() -> PathBuf {
    config_dir_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.json")
}

fn config_dir_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("version-scrape")
}
