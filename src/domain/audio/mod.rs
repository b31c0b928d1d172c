//! Audio Context - pronunciation audio for dictionary headwords
//!
//! Responsibilities:
//! - Lemma and Gender value objects with construction-time validation
//! - domain errors for caller contract violations

mod errors;
mod value_objects;

pub use errors::AudioError;
pub use value_objects::{Gender, Lemma};
