//! Audio Context - Value Objects

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::errors::AudioError;

/// Dictionary headword whose pronunciation audio is stored.
///
/// Invariants:
/// - never empty
/// - stored and compared byte-for-byte; no case folding or diacritic
///   normalization (`pāṇi` and `pani` are distinct lemmas)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Lemma(String);

impl Lemma {
    pub fn new(lemma: impl Into<String>) -> Result<Self, AudioError> {
        let lemma = lemma.into();
        if lemma.is_empty() {
            return Err(AudioError::EmptyLemma);
        }
        Ok(Self(lemma))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Lemma {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Voice category of a recorded pronunciation.
///
/// Closed enumeration: the store only ever holds the two labels below, so
/// an invalid label is a construction-time error, not a runtime mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(AudioError::InvalidGender(other.to_string())),
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
