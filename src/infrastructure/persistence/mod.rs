//! Persistence Layer
//!
//! SQLite storage implementation

pub mod sqlite;

pub use sqlite::{SqliteAudioStore, SqliteStoreBuilder};
