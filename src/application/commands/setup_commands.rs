//! Setup Commands

use std::path::PathBuf;

/// Create and populate the audio store if it does not exist yet.
///
/// `db_path` overrides the configured default location; `None` uses the
/// handler's default. Idempotent: an existing store is confirmed as-is.
#[derive(Debug, Clone)]
pub struct SetupDatabase {
    pub db_path: Option<PathBuf>,
}
