//! Audio Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    #[error("lemma must not be empty")]
    EmptyLemma,

    #[error("invalid gender label: {0:?} (expected \"male\" or \"female\")")]
    InvalidGender(String),
}
