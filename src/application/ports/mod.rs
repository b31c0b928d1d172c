//! Application Ports - outbound port definitions
//!
//! Abstract interfaces between the application layer and infrastructure.

mod audio_source;
mod audio_store;

pub use audio_source::{AudioSourcePort, SourceError};
pub use audio_store::{AudioRecord, AudioStorePort, StoreBuilderPort, StoreError};
