//! SQLite Store Builder - atomic create-and-populate
//!
//! The store is built at a staging path beside the target and renamed
//! into place only after every record is committed and the pool is
//! closed. A failed build removes the staging file, so the target path
//! either holds a complete store or nothing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use super::SqliteAudioStore;
use crate::application::ports::{AudioRecord, AudioStorePort, StoreBuilderPort, StoreError};

/// Atomic store builder
pub struct SqliteStoreBuilder;

/// Staging file beside the target: `dpd_audio.db` -> `dpd_audio.db.tmp`
fn staging_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target.with_file_name(name)
}

/// Remove the staging file and any WAL sidecars left by an interrupted build.
async fn remove_staging(staging: &Path) {
    let _ = fs::remove_file(staging).await;
    for suffix in ["-wal", "-shm"] {
        let mut name = staging
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(suffix);
        let _ = fs::remove_file(staging.with_file_name(name)).await;
    }
}

async fn populate(staging: &Path, records: &[AudioRecord]) -> Result<usize, StoreError> {
    let store = SqliteAudioStore::create(staging).await?;

    let result = store.put_batch(records).await;

    // Checkpoint and release the file before it is renamed
    store.close().await;

    result
}

#[async_trait]
impl StoreBuilderPort for SqliteStoreBuilder {
    async fn build(&self, path: &Path, records: &[AudioRecord]) -> Result<usize, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StoreError::IoError(e.to_string()))?;
            }
        }

        let staging = staging_path(path);

        // A stale staging file from an earlier interrupted run
        remove_staging(&staging).await;

        let written = match populate(&staging, records).await {
            Ok(written) => written,
            Err(e) => {
                remove_staging(&staging).await;
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&staging, path).await {
            remove_staging(&staging).await;
            return Err(StoreError::IoError(e.to_string()));
        }

        tracing::info!(
            db_path = %path.display(),
            records = written,
            "Audio store published"
        );

        Ok(written)
    }
}
