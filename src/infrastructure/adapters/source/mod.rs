//! Source Adapters

mod folder_source;

pub use folder_source::{FolderAudioSource, FolderSourceConfig};
