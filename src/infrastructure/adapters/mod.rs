//! Infrastructure Adapters

pub mod source;

pub use source::{FolderAudioSource, FolderSourceConfig};
