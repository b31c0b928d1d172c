//! Application layer errors
//!
//! The taxonomy keeps the three failure classes strictly apart:
//! a missing store file, an invalid argument, and a failed setup.
//! A record miss is never an error; it is an `Ok(None)` result.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::{SourceError, StoreError};
use crate::config::ConfigError;
use crate::domain::AudioError;

/// Application layer error
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// The store file does not exist at read time.
    #[error("audio store not found: {}", .0.display())]
    StoreNotFound(PathBuf),

    /// Caller contract violation (empty lemma, malformed gender label).
    /// Raised before any I/O.
    #[error("validation error: {0}")]
    Validation(String),

    /// Population could not complete; the store was left absent, never
    /// partially written.
    #[error("setup failed: {0}")]
    SetupFailed(String),

    /// Storage engine fault unrelated to file existence.
    #[error("store error: {0}")]
    StoreError(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn setup_failed(message: impl Into<String>) -> Self {
        Self::SetupFailed(message.into())
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(path) => Self::StoreNotFound(path),
            other => Self::StoreError(other.to_string()),
        }
    }
}

impl From<SourceError> for ApplicationError {
    fn from(err: SourceError) -> Self {
        Self::SetupFailed(err.to_string())
    }
}

impl From<AudioError> for ApplicationError {
    fn from(err: AudioError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<ConfigError> for ApplicationError {
    fn from(err: ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}
