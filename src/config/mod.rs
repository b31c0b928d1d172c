//! Configuration Module
//!
//! Layered configuration sources:
//! - environment variables (highest priority)
//! - configuration file (TOML)
//! - defaults (lowest priority)

mod loader;
mod types;

pub use loader::{load_config, load_config_from_path, print_config, ConfigError};
pub use types::{AppConfig, DatabaseConfig, LogConfig, SourceConfig};
