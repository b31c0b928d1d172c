//! Audio Queries

use crate::domain::{Gender, Lemma};

/// Fetch the stored recording for one (lemma, gender) key.
#[derive(Debug, Clone)]
pub struct GetAudio {
    pub lemma: Lemma,
    pub gender: Gender,
}

/// Query response
#[derive(Debug, Clone)]
pub struct GetAudioResponse {
    pub audio_data: Vec<u8>,
    pub content_type: String,
}
