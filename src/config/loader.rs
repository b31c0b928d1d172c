//! Configuration Loader
//!
//! Multi-source configuration, merged by priority (highest first):
//! 1. Environment variables
//! 2. Configuration file (config.toml)
//! 3. Defaults

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// Configuration file search names
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// Load the application configuration.
///
/// Environment variables use the prefix `DPD_AUDIO` with `__` as the
/// level separator, e.g.
/// - `DPD_AUDIO_DATABASE__PATH=/data/dpd_audio.db`
/// - `DPD_AUDIO_SOURCE__MALE_DIR=/staging/mp3s/male`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// Load configuration from an explicit file instead of the search path.
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // Defaults (lowest priority)
    builder = builder
        .set_default("database.path", "resources/dpd_audio/db/dpd_audio.db")?
        .set_default(
            "source.male_dir",
            "resources/dpd_audio/mp3s/Kannada_kn-m4_Neutral",
        )?
        .set_default(
            "source.female_dir",
            "resources/dpd_audio/mp3s/Kannada_kn-f4_Neutral",
        )?
        .set_default("log.level", "info")?;

    // Configuration file, if present
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // Environment variables (highest priority)
    builder = builder.add_source(
        Environment::with_prefix("DPD_AUDIO")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;

    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    validate_config(&app_config)?;

    Ok(app_config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.database.path.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "Database path cannot be empty".to_string(),
        ));
    }

    if config.source.male_dir.as_os_str().is_empty()
        || config.source.female_dir.as_os_str().is_empty()
    {
        return Err(ConfigError::ValidationError(
            "Source folders cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Log the effective configuration at startup.
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Database: {}", config.database.path.display());
    tracing::info!("Male source: {}", config.source.male_dir.display());
    tracing::info!("Female source: {}", config.source.female_dir.display());
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
