//! Infrastructure Layer
//!
//! Concrete implementations of the application ports

pub mod adapters;
pub mod persistence;

pub use adapters::{FolderAudioSource, FolderSourceConfig};
pub use persistence::{SqliteAudioStore, SqliteStoreBuilder};
