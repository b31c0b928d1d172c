//! Application layer - use case orchestration
//!
//! Contains:
//! - ports: hexagonal port definitions (AudioStore, AudioSource, StoreBuilder)
//! - commands: setup command and handler
//! - queries: lookup query and handler
//! - error: application error taxonomy

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{SetupDatabase, SetupDatabaseHandler, SetupDatabaseResponse};

pub use error::ApplicationError;

pub use ports::{
    AudioRecord, AudioSourcePort, AudioStorePort, SourceError, StoreBuilderPort, StoreError,
};

pub use queries::{GetAudio, GetAudioHandler, GetAudioResponse};
