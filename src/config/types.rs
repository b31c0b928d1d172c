//! Configuration Types

use serde::Deserialize;
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Population source configuration
    #[serde(default)]
    pub source: SourceConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the audio store file
    #[serde(default = "default_db_path")]
    pub path: PathBuf,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("resources/dpd_audio/db/dpd_audio.db")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Population source configuration
///
/// The folders are produced by the external audio-generation pipeline;
/// the defaults match its staging layout.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Male-voice MP3 folder
    #[serde(default = "default_male_dir")]
    pub male_dir: PathBuf,

    /// Female-voice MP3 folder
    #[serde(default = "default_female_dir")]
    pub female_dir: PathBuf,
}

fn default_male_dir() -> PathBuf {
    PathBuf::from("resources/dpd_audio/mp3s/Kannada_kn-m4_Neutral")
}

fn default_female_dir() -> PathBuf {
    PathBuf::from("resources/dpd_audio/mp3s/Kannada_kn-f4_Neutral")
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            male_dir: default_male_dir(),
            female_dir: default_female_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(
            config.database.path,
            PathBuf::from("resources/dpd_audio/db/dpd_audio.db")
        );
        assert_eq!(
            config.source.male_dir,
            PathBuf::from("resources/dpd_audio/mp3s/Kannada_kn-m4_Neutral")
        );
        assert_eq!(config.log.level, "info");
    }
}
