//! Audio Source Port - outbound port
//!
//! Boundary to the external audio-generation pipeline: whatever produced
//! the recordings, this port yields them as (lemma, gender, bytes)
//! records for the one-time population step.

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

use super::audio_store::AudioRecord;

/// Source errors
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("audio folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Source Port
#[async_trait]
pub trait AudioSourcePort: Send + Sync {
    /// Collect every available recording from the source.
    async fn collect(&self) -> Result<Vec<AudioRecord>, SourceError>;
}
