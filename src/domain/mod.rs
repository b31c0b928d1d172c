//! Domain Layer
//!
//! Single bounded context:
//! - Audio Context: dictionary pronunciation audio

pub mod audio;

pub use audio::{AudioError, Gender, Lemma};
