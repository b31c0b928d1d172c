//! DPD Audio - setup entry point
//!
//! Builds the pronunciation store from the staging folders if it does
//! not exist yet. Safe to run repeatedly; an existing store is left
//! untouched.

use std::sync::Arc;

use dpd_audio::application::commands::{SetupDatabase, SetupDatabaseHandler};
use dpd_audio::config::{load_config, print_config};
use dpd_audio::infrastructure::adapters::{FolderAudioSource, FolderSourceConfig};
use dpd_audio::infrastructure::persistence::sqlite::SqliteStoreBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    let log_filter = format!("{},dpd_audio={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    print_config(&config);

    let source = FolderAudioSource::new(FolderSourceConfig {
        male_dir: config.source.male_dir.clone(),
        female_dir: config.source.female_dir.clone(),
    });

    let handler = SetupDatabaseHandler::new(
        Arc::new(source),
        Arc::new(SqliteStoreBuilder),
        config.database.path.clone(),
    );

    let response = handler.handle(SetupDatabase { db_path: None }).await?;

    if response.created {
        tracing::info!(
            db_path = %response.db_path.display(),
            records = response.records,
            "Audio database ready"
        );
    } else {
        tracing::info!(
            db_path = %response.db_path.display(),
            "Audio database already present"
        );
    }

    Ok(())
}
