//! Audio Store Port - outbound port
//!
//! Abstract interface over the persistent keyed store mapping
//! (lemma, gender) to MP3 bytes. Implemented in the infrastructure
//! layer (SQLite).

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::{Gender, Lemma};

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file does not exist. Distinct from a record miss, which
    /// is an `Ok(None)` result, never an error.
    #[error("audio store not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// One pronunciation recording (for persistence).
///
/// (lemma, gender) is the unique composite key; `audio` is opaque
/// MP3 bytes and is never inspected.
#[derive(Debug, Clone)]
pub struct AudioRecord {
    pub lemma: Lemma,
    pub gender: Gender,
    pub audio: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

/// Store Builder Port
///
/// One-shot creation of a fully-populated store file. All-or-nothing:
/// after an error no file may remain at `path`, so a half-written store
/// can never be mistaken for a complete one.
#[async_trait]
pub trait StoreBuilderPort: Send + Sync {
    /// Build the store at `path` containing exactly `records`.
    /// Returns the number of records written.
    async fn build(
        &self,
        path: &std::path::Path,
        records: &[AudioRecord],
    ) -> Result<usize, StoreError>;
}

/// Audio Store Port
#[async_trait]
pub trait AudioStorePort: Send + Sync {
    /// Exact-match point lookup. A miss is `Ok(None)`.
    async fn find(&self, lemma: &Lemma, gender: Gender)
        -> Result<Option<AudioRecord>, StoreError>;

    /// Insert or replace a single record.
    async fn put(&self, record: &AudioRecord) -> Result<(), StoreError>;

    /// Insert all records in one transaction. Returns the number written;
    /// on error nothing is committed.
    async fn put_batch(&self, records: &[AudioRecord]) -> Result<usize, StoreError>;

    /// Total number of stored records.
    async fn count(&self) -> Result<u64, StoreError>;
}
