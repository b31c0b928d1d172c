//! Setup Command Handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::application::commands::SetupDatabase;
use crate::application::error::ApplicationError;
use crate::application::ports::{AudioSourcePort, StoreBuilderPort};

/// Setup response
#[derive(Debug, Clone)]
pub struct SetupDatabaseResponse {
    pub db_path: PathBuf,
    /// false when the store already existed and nothing was written
    pub created: bool,
    pub records: usize,
}

/// SetupDatabase Handler
///
/// An existing store file makes this a no-op. Otherwise all records are
/// collected from the source and handed to the builder, which publishes
/// the store atomically: on failure no file is left at the target path.
pub struct SetupDatabaseHandler {
    source: Arc<dyn AudioSourcePort>,
    builder: Arc<dyn StoreBuilderPort>,
    default_db_path: PathBuf,
}

impl SetupDatabaseHandler {
    pub fn new(
        source: Arc<dyn AudioSourcePort>,
        builder: Arc<dyn StoreBuilderPort>,
        default_db_path: PathBuf,
    ) -> Self {
        Self {
            source,
            builder,
            default_db_path,
        }
    }

    pub async fn handle(
        &self,
        command: SetupDatabase,
    ) -> Result<SetupDatabaseResponse, ApplicationError> {
        let db_path = command
            .db_path
            .unwrap_or_else(|| self.default_db_path.clone());

        if db_path.exists() {
            tracing::info!(
                db_path = %db_path.display(),
                "Audio store already present, setup is a no-op"
            );

            return Ok(SetupDatabaseResponse {
                db_path,
                created: false,
                records: 0,
            });
        }

        let records = self.source.collect().await?;

        let written = self
            .builder
            .build(&db_path, &records)
            .await
            .map_err(|e| ApplicationError::setup_failed(e.to_string()))?;

        tracing::info!(
            db_path = %db_path.display(),
            records = written,
            "Audio store created and populated"
        );

        Ok(SetupDatabaseResponse {
            db_path,
            created: true,
            records: written,
        })
    }
}
