//! Application configuration

use podcaster_catalog::CatalogConfig;
use podcaster_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

const DEFAULT_CONFIG_FILE: &str = "podcaster.toml";
const ENV_PREFIX: &str = "PODCASTER";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Configuration file not found: {0}")]
    Missing(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `podcaster.toml` in the
    /// working directory is used when present. `PODCASTER_*` variables
    /// override file values, with `__` between section and key
    /// (e.g. `PODCASTER_CATALOG__BASE_URL`).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::Missing(path.to_path_buf()));
                }
                settings = settings.add_source(config::File::from(path));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = settings.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.catalog.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "catalog.base_url is required (set PODCASTER_CATALOG__BASE_URL)".to_string(),
            ));
        }

        if self.catalog.limit == 0 {
            return Err(ConfigError::Invalid(
                "catalog.limit must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
