//! End-to-end tests for setup and lookup over a real on-disk store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tempfile::tempdir;
use tokio::fs;

use dpd_audio::application::commands::{SetupDatabase, SetupDatabaseHandler};
use dpd_audio::infrastructure::adapters::{FolderAudioSource, FolderSourceConfig};
use dpd_audio::infrastructure::persistence::sqlite::SqliteStoreBuilder;
use dpd_audio::{get_audio_record_at, ApplicationError, Gender};

// Minimal valid MP3 frame header, as the generation pipeline would emit
const MALE_PANI: &[u8] = &[0xFF, 0xFB, 0x90, 0x44, 0x00, 0x11, 0x22, 0x33];
const FEMALE_DHAMMA: &[u8] = &[0xFF, 0xFB, 0x90, 0x44, 0xAA, 0xBB];

async fn stage_source(root: &Path) -> FolderSourceConfig {
    let male_dir = root.join("mp3s/male");
    let female_dir = root.join("mp3s/female");
    fs::create_dir_all(&male_dir).await.unwrap();
    fs::create_dir_all(&female_dir).await.unwrap();

    fs::write(male_dir.join("pāṇi.mp3"), MALE_PANI).await.unwrap();
    fs::write(female_dir.join("dhamma.mp3"), FEMALE_DHAMMA)
        .await
        .unwrap();

    FolderSourceConfig {
        male_dir,
        female_dir,
    }
}

fn handler(source: FolderSourceConfig, default_db_path: PathBuf) -> SetupDatabaseHandler {
    SetupDatabaseHandler::new(
        Arc::new(FolderAudioSource::new(source)),
        Arc::new(SqliteStoreBuilder),
        default_db_path,
    )
}

#[tokio::test]
async fn setup_then_get_returns_inserted_bytes() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("db/dpd_audio.db");
    let source = stage_source(dir.path()).await;

    let response = handler(source, db_path.clone())
        .handle(SetupDatabase { db_path: None })
        .await
        .unwrap();

    assert!(response.created);
    assert_eq!(response.records, 2);
    assert_eq!(response.db_path, db_path);

    let audio = get_audio_record_at(&db_path, "pāṇi", Gender::Male)
        .await
        .unwrap();
    assert_eq!(audio.as_deref(), Some(MALE_PANI));

    // No female recording for this lemma: absent, not an error
    let female = get_audio_record_at(&db_path, "pāṇi", Gender::Female)
        .await
        .unwrap();
    assert!(female.is_none());

    let unknown = get_audio_record_at(&db_path, "unknown_lemma", Gender::Male)
        .await
        .unwrap();
    assert!(unknown.is_none());
}

#[tokio::test]
async fn lookup_is_diacritic_exact() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dpd_audio.db");
    let source = stage_source(dir.path()).await;

    handler(source, db_path.clone())
        .handle(SetupDatabase { db_path: None })
        .await
        .unwrap();

    let stripped = get_audio_record_at(&db_path, "pani", Gender::Male)
        .await
        .unwrap();
    assert!(stripped.is_none());
}

#[tokio::test]
async fn get_before_setup_is_store_not_found() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("never_created.db");

    let err = get_audio_record_at(&db_path, "pāṇi", Gender::Male)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::StoreNotFound(p) if p == db_path));
}

#[tokio::test]
async fn empty_lemma_is_rejected_before_store_io() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("never_created.db");

    // Validation fires even though the store file is also absent
    let err = get_audio_record_at(&db_path, "", Gender::Male)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn setup_is_idempotent() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dpd_audio.db");
    let source = stage_source(dir.path()).await;

    let first = handler(source.clone(), db_path.clone())
        .handle(SetupDatabase { db_path: None })
        .await
        .unwrap();
    assert!(first.created);

    // New source material appears after the store was built
    fs::write(source.male_dir.join("sati.mp3"), b"late arrival")
        .await
        .unwrap();

    let second = handler(source, db_path.clone())
        .handle(SetupDatabase { db_path: None })
        .await
        .unwrap();

    assert!(!second.created);
    assert_eq!(second.db_path, first.db_path);

    // Existing data untouched, late arrival not picked up
    let audio = get_audio_record_at(&db_path, "pāṇi", Gender::Male)
        .await
        .unwrap();
    assert_eq!(audio.as_deref(), Some(MALE_PANI));
    let late = get_audio_record_at(&db_path, "sati", Gender::Male)
        .await
        .unwrap();
    assert!(late.is_none());
}

#[tokio::test]
async fn failed_population_leaves_no_store() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("db/dpd_audio.db");
    let male_dir = dir.path().join("mp3s/male");
    fs::create_dir_all(&male_dir).await.unwrap();

    let source = FolderSourceConfig {
        male_dir,
        female_dir: dir.path().join("mp3s/missing"),
    };

    let err = handler(source, db_path.clone())
        .handle(SetupDatabase { db_path: None })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::SetupFailed(_)));
    assert!(!db_path.exists());

    // A later lookup still reports the store as missing, not empty
    let err = get_audio_record_at(&db_path, "pāṇi", Gender::Male)
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::StoreNotFound(_)));
}

#[tokio::test]
async fn explicit_path_overrides_handler_default() {
    let dir = tempdir().unwrap();
    let default_path = dir.path().join("default.db");
    let override_path = dir.path().join("override.db");
    let source = stage_source(dir.path()).await;

    let response = handler(source, default_path.clone())
        .handle(SetupDatabase {
            db_path: Some(override_path.clone()),
        })
        .await
        .unwrap();

    assert_eq!(response.db_path, override_path);
    assert!(override_path.exists());
    assert!(!default_path.exists());
}

#[tokio::test]
async fn rejected_takes_are_not_populated() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("dpd_audio.db");
    let source = stage_source(dir.path()).await;

    fs::write(source.male_dir.join("!pāṇi.mp3"), b"rejected take")
        .await
        .unwrap();

    let response = handler(source, db_path.clone())
        .handle(SetupDatabase { db_path: None })
        .await
        .unwrap();
    assert_eq!(response.records, 2);

    let rejected = get_audio_record_at(&db_path, "!pāṇi", Gender::Male)
        .await
        .unwrap();
    assert!(rejected.is_none());
}
