//! Layered Settings
//!
//! Defaults, then an optional settings file, then `ADVISOR__*` environment
//! variables (e.g. `ADVISOR__SERVER__BIND_ADDR=127.0.0.1:9000`).

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::Level;

/// Environment variable naming the settings file
pub const CONFIG_PATH_VAR: &str = "ADVISOR_CONFIG";

const DEFAULT_CONFIG_PATH: &str = "advisor.toml";

/// Top-level settings
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorSettings {
    pub server: ServerSettings,
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Listen address (default: 0.0.0.0:8080)
    pub bind_addr: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    /// Rule definition file, format chosen by extension
    pub path: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// Max level: trace, debug, info, warn, error
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl LoggingSettings {
    /// Parsed `level`, or `None` when it names no tracing level
    pub fn max_level(&self) -> Option<Level> {
        self.level.parse().ok()
    }
}

impl AdvisorSettings {
    /// Load settings from the file named by `ADVISOR_CONFIG`, or `advisor.toml`
    pub fn load() -> Result<Self, ConfigError> {
        let path =
            std::env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load settings from a specific file. A missing file is not an error.
    pub fn load_from(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.bind_addr", "0.0.0.0:8080")?
            .set_default("catalog.path", "rules/catalog.toml")?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("ADVISOR").separator("__"))
            .build()?
            .try_deserialize()
    }
}
