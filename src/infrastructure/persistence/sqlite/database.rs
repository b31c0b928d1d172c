//! SQLite Database - connections and migrations

use sqlx::{sqlite::SqlitePoolOptions, Pool, Sqlite};
use std::path::Path;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Connection URL for the database file
    pub database_url: String,
    /// Maximum pool size
    pub max_connections: u32,
    /// Read-only connections skip the write pragmas
    pub read_only: bool,
}

impl DatabaseConfig {
    /// Writable configuration; creates the file if it does not exist.
    pub fn create(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=rwc", path.as_ref().display()),
            max_connections: 5,
            read_only: false,
        }
    }

    /// Read-only configuration for the lookup path. The file must
    /// already exist.
    pub fn read_only(path: impl AsRef<Path>) -> Self {
        Self {
            database_url: format!("sqlite:{}?mode=ro", path.as_ref().display()),
            max_connections: 5,
            read_only: true,
        }
    }

    pub fn in_memory() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            read_only: false,
        }
    }
}

/// Database connection pool
pub type DbPool = Pool<Sqlite>;

/// Create a connection pool
pub async fn create_pool(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    // Wait on a locked database instead of failing immediately
    sqlx::query("PRAGMA busy_timeout=5000").execute(&pool).await?;

    if !config.read_only {
        // WAL mode allows concurrent readers during population
        sqlx::query("PRAGMA journal_mode=WAL").execute(&pool).await?;

        sqlx::query("PRAGMA synchronous=NORMAL")
            .execute(&pool)
            .await?;
    }

    tracing::debug!(
        database_url = %config.database_url,
        read_only = config.read_only,
        "SQLite pool created"
    );

    Ok(pool)
}

/// Run database migrations
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::Error> {
    // audio_records table: one row per (lemma, gender) pronunciation
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS audio_records (
            lemma TEXT NOT NULL,
            gender TEXT NOT NULL,
            audio BLOB NOT NULL,
            created_at TEXT NOT NULL,
            PRIMARY KEY (lemma, gender)
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Database migrations completed");
    Ok(())
}
