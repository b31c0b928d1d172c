//! SQLite Audio Store

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::path::Path;
use std::str::FromStr;

use super::{create_pool, run_migrations, DatabaseConfig, DbPool};
use crate::application::ports::{AudioRecord, AudioStorePort, StoreError};
use crate::domain::{Gender, Lemma};

/// SQLite-backed audio store
///
/// `open` is the lookup path and requires the file to exist; `create` is
/// the population path and may create it.
#[derive(Debug)]
pub struct SqliteAudioStore {
    pool: DbPool,
}

impl SqliteAudioStore {
    /// Open an existing store for reading. A missing file is a
    /// `StoreError::NotFound`, reported before any connection is made.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }

        let pool = create_pool(&DatabaseConfig::read_only(path))
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Create a writable store at `path`, running migrations.
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let pool = create_pool(&DatabaseConfig::create(path))
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        run_migrations(&pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// In-memory store for tests.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let pool = create_pool(&DatabaseConfig::in_memory())
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        run_migrations(&pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(Self { pool })
    }

    /// Close the pool, checkpointing any pending writes. Required before
    /// the store file is renamed or moved.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[derive(FromRow)]
struct AudioRow {
    lemma: String,
    gender: String,
    audio: Vec<u8>,
    created_at: String,
}

impl TryFrom<AudioRow> for AudioRecord {
    type Error = StoreError;

    fn try_from(row: AudioRow) -> Result<Self, Self::Error> {
        Ok(AudioRecord {
            lemma: Lemma::new(row.lemma)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?,
            gender: Gender::from_str(&row.gender)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?,
            audio: row.audio,
            created_at: DateTime::parse_from_rfc3339(&row.created_at)
                .map_err(|e| StoreError::SerializationError(e.to_string()))?
                .with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl AudioStorePort for SqliteAudioStore {
    async fn find(
        &self,
        lemma: &Lemma,
        gender: Gender,
    ) -> Result<Option<AudioRecord>, StoreError> {
        let row: Option<AudioRow> = sqlx::query_as(
            "SELECT lemma, gender, audio, created_at FROM audio_records WHERE lemma = ? AND gender = ?",
        )
        .bind(lemma.as_str())
        .bind(gender.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        row.map(AudioRecord::try_from).transpose()
    }

    async fn put(&self, record: &AudioRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO audio_records (lemma, gender, audio, created_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(lemma, gender) DO UPDATE SET
                audio = excluded.audio,
                created_at = excluded.created_at
            "#,
        )
        .bind(record.lemma.as_str())
        .bind(record.gender.as_str())
        .bind(&record.audio)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn put_batch(&self, records: &[AudioRecord]) -> Result<usize, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO audio_records (lemma, gender, audio, created_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT(lemma, gender) DO UPDATE SET
                    audio = excluded.audio,
                    created_at = excluded.created_at
                "#,
            )
            .bind(record.lemma.as_str())
            .bind(record.gender.as_str())
            .bind(&record.audio)
            .bind(record.created_at.to_rfc3339())
            .execute(&mut *tx)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(records.len())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM audio_records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::DatabaseError(e.to_string()))?;

        Ok(count as u64)
    }
}
