//! Audio Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::AudioStorePort;
use crate::application::queries::audio_queries::{GetAudio, GetAudioResponse};

/// GetAudio Handler - exact-match point lookup
///
/// A miss is `Ok(None)`; only a missing store file or an engine fault
/// surfaces as an error.
pub struct GetAudioHandler {
    store: Arc<dyn AudioStorePort>,
}

impl GetAudioHandler {
    pub fn new(store: Arc<dyn AudioStorePort>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetAudio,
    ) -> Result<Option<GetAudioResponse>, ApplicationError> {
        let record = self.store.find(&query.lemma, query.gender).await?;

        match record {
            Some(record) => {
                tracing::debug!(
                    lemma = %query.lemma,
                    gender = %query.gender,
                    size_bytes = record.audio.len(),
                    "Audio record found"
                );

                Ok(Some(GetAudioResponse {
                    audio_data: record.audio,
                    content_type: "audio/mpeg".to_string(),
                }))
            }
            None => {
                tracing::debug!(
                    lemma = %query.lemma,
                    gender = %query.gender,
                    "Audio record not found"
                );

                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{AudioRecord, AudioStorePort, StoreError};
    use crate::domain::{Gender, Lemma};
    use async_trait::async_trait;
    use chrono::Utc;

    struct FixedStore {
        records: Vec<AudioRecord>,
    }

    #[async_trait]
    impl AudioStorePort for FixedStore {
        async fn find(
            &self,
            lemma: &Lemma,
            gender: Gender,
        ) -> Result<Option<AudioRecord>, StoreError> {
            Ok(self
                .records
                .iter()
                .find(|r| &r.lemma == lemma && r.gender == gender)
                .cloned())
        }

        async fn put(&self, _record: &AudioRecord) -> Result<(), StoreError> {
            unimplemented!("read-only test double")
        }

        async fn put_batch(&self, _records: &[AudioRecord]) -> Result<usize, StoreError> {
            unimplemented!("read-only test double")
        }

        async fn count(&self) -> Result<u64, StoreError> {
            Ok(self.records.len() as u64)
        }
    }

    #[tokio::test]
    async fn test_get_audio_hit() {
        let store = FixedStore {
            records: vec![AudioRecord {
                lemma: Lemma::new("pāṇi").unwrap(),
                gender: Gender::Male,
                audio: vec![0xFF, 0xFB, 0x90, 0x00],
                created_at: Utc::now(),
            }],
        };
        let handler = GetAudioHandler::new(Arc::new(store));

        let response = handler
            .handle(GetAudio {
                lemma: Lemma::new("pāṇi").unwrap(),
                gender: Gender::Male,
            })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(response.audio_data, vec![0xFF, 0xFB, 0x90, 0x00]);
        assert_eq!(response.content_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_get_audio_miss_is_none_not_error() {
        let store = FixedStore { records: vec![] };
        let handler = GetAudioHandler::new(Arc::new(store));

        let response = handler
            .handle(GetAudio {
                lemma: Lemma::new("unknown_lemma").unwrap(),
                gender: Gender::Male,
            })
            .await
            .unwrap();

        assert!(response.is_none());
    }
}
