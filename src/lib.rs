//! DPD Audio - pronunciation audio store for dictionary headwords
//!
//! A thin accessor over a single-file SQLite store mapping
//! (lemma, gender) to MP3 bytes. Two operations:
//! - setup: create and populate the store if absent (idempotent, atomic)
//! - get: exact-match point lookup returning the bytes or `None`
//!
//! Layers:
//! - domain/: Lemma and Gender value objects
//! - application/: ports, setup command, lookup query
//! - infrastructure/: SQLite persistence, folder population source
//! - config/: layered configuration (env > file > defaults)

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::error::ApplicationError;
pub use config::{load_config, AppConfig};
pub use domain::{AudioError, Gender, Lemma};

use application::commands::{SetupDatabase, SetupDatabaseHandler};
use application::queries::{GetAudio, GetAudioHandler};
use infrastructure::adapters::{FolderAudioSource, FolderSourceConfig};
use infrastructure::persistence::sqlite::{SqliteAudioStore, SqliteStoreBuilder};

/// Create and populate the audio database in one step.
///
/// `db_path` overrides the configured location; source folders come from
/// configuration. If the store already exists the call is a no-op that
/// returns the path. Population is atomic: on failure the store is left
/// absent, never half-written.
pub async fn setup_audio_database(db_path: Option<&Path>) -> Result<PathBuf, ApplicationError> {
    let config = load_config()?;

    let source = FolderAudioSource::new(FolderSourceConfig {
        male_dir: config.source.male_dir.clone(),
        female_dir: config.source.female_dir.clone(),
    });

    let handler = SetupDatabaseHandler::new(
        Arc::new(source),
        Arc::new(SqliteStoreBuilder),
        config.database.path.clone(),
    );

    let response = handler
        .handle(SetupDatabase {
            db_path: db_path.map(Path::to_path_buf),
        })
        .await?;

    Ok(response.db_path)
}

/// Look up the stored recording for `(lemma, gender)` in the configured
/// store. A miss is `Ok(None)`; a missing store file is
/// `ApplicationError::StoreNotFound`.
pub async fn get_audio_record(
    lemma: &str,
    gender: Gender,
) -> Result<Option<Vec<u8>>, ApplicationError> {
    let config = load_config()?;
    get_audio_record_at(&config.database.path, lemma, gender).await
}

/// Look up against an explicit store path (tests, alternate deployments).
pub async fn get_audio_record_at(
    db_path: &Path,
    lemma: &str,
    gender: Gender,
) -> Result<Option<Vec<u8>>, ApplicationError> {
    // Argument validation precedes any store I/O
    let lemma = Lemma::new(lemma)?;

    let store = SqliteAudioStore::open(db_path).await?;
    let handler = GetAudioHandler::new(Arc::new(store));

    let response = handler.handle(GetAudio { lemma, gender }).await?;

    Ok(response.map(|r| r.audio_data))
}
