//! Application configuration
//!
//! Sources, lowest to highest precedence: built-in defaults, a TOML file
//! (`-c path`, or the first of `shortform.toml`, `config.toml`,
//! `/etc/shortform/config.toml`), environment variables, CLI flags.

pub mod args;

pub use args::CliArgs;

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::errors::{Result, ShortformError};

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the link-shortening service.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file path. The terminal is busy drawing the form, so without a
    /// file the log output is discarded.
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

const CONFIG_PATHS: [&str; 3] = ["shortform.toml", "config.toml", "/etc/shortform/config.toml"];

impl AppConfig {
    /// Load configuration, apply env overrides, then CLI flags.
    pub fn load(cli: &CliArgs) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::load_file(path)?,
            None => Self::probe_default_paths(),
        };
        config.override_with_env();
        config.override_with_cli(cli);
        Ok(config)
    }

    /// An explicitly requested file must exist and parse.
    fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ShortformError::config(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| ShortformError::config(format!("{}: {}", path.display(), e)))
    }

    /// Probe the well-known locations; fall back to defaults quietly.
    fn probe_default_paths() -> Self {
        for path in &CONFIG_PATHS {
            if !Path::new(path).exists() {
                continue;
            }
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<AppConfig>(&content) {
                    Ok(config) => {
                        debug!("loaded config from {}", path);
                        return config;
                    }
                    Err(e) => warn!("failed to parse config file {}: {}", path, e),
                },
                Err(e) => warn!("failed to read config file {}: {}", path, e),
            }
        }
        Self::default()
    }

    fn override_with_env(&mut self) {
        if let Ok(base) = env::var("SHORTFORM_API_BASE") {
            self.api.base_url = base;
        }
        if let Ok(timeout) = env::var("SHORTFORM_HTTP_TIMEOUT_SECS") {
            match timeout.parse() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!("invalid SHORTFORM_HTTP_TIMEOUT_SECS: {}", timeout),
            }
        }
        if let Ok(level) = env::var("SHORTFORM_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("SHORTFORM_LOG_FILE") {
            self.logging.file = Some(file);
        }
    }

    fn override_with_cli(&mut self, cli: &CliArgs) {
        if let Some(base) = &cli.api_base {
            self.api.base_url = base.clone();
        }
    }
}
