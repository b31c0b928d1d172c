//! Folder Audio Source - population input from the staging pipeline
//!
//! The audio-generation pipeline drops one MP3 per headword into a
//! per-voice folder; the file stem is the lemma. This adapter turns
//! those folders into AudioRecords for the population step.

use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::{AudioRecord, AudioSourcePort, SourceError};
use crate::domain::{Gender, Lemma};

/// Folder source configuration
#[derive(Debug, Clone)]
pub struct FolderSourceConfig {
    /// Folder holding the male-voice MP3s
    pub male_dir: PathBuf,
    /// Folder holding the female-voice MP3s
    pub female_dir: PathBuf,
}

/// Filesystem audio source
pub struct FolderAudioSource {
    config: FolderSourceConfig,
}

impl FolderAudioSource {
    pub fn new(config: FolderSourceConfig) -> Self {
        Self { config }
    }

    async fn collect_folder(
        dir: &Path,
        gender: Gender,
        records: &mut Vec<AudioRecord>,
    ) -> Result<(), SourceError> {
        let mut entries = fs::read_dir(dir)
            .await
            .map_err(|e| SourceError::IoError(e.to_string()))?;

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| SourceError::IoError(e.to_string()))?
        {
            let path = entry.path();

            if !path.extension().map_or(false, |ext| ext == "mp3") {
                continue;
            }

            let stem = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem,
                None => continue,
            };

            // The staging pipeline marks rejected takes with a leading "!"
            if stem.starts_with('!') {
                continue;
            }

            let lemma = match Lemma::new(stem) {
                Ok(lemma) => lemma,
                Err(_) => continue,
            };

            let audio = fs::read(&path)
                .await
                .map_err(|e| SourceError::IoError(e.to_string()))?;

            records.push(AudioRecord {
                lemma,
                gender,
                audio,
                created_at: Utc::now(),
            });
        }

        Ok(())
    }
}

#[async_trait]
impl AudioSourcePort for FolderAudioSource {
    async fn collect(&self) -> Result<Vec<AudioRecord>, SourceError> {
        let folders = [
            (&self.config.male_dir, Gender::Male),
            (&self.config.female_dir, Gender::Female),
        ];

        let mut records = Vec::new();

        for (dir, gender) in folders {
            if !dir.exists() {
                return Err(SourceError::FolderNotFound(dir.clone()));
            }

            Self::collect_folder(dir, gender, &mut records).await?;
        }

        // Deterministic population order
        records.sort_by(|a, b| {
            a.lemma
                .as_str()
                .cmp(b.lemma.as_str())
                .then(a.gender.as_str().cmp(b.gender.as_str()))
        });

        tracing::info!(
            male_dir = %self.config.male_dir.display(),
            female_dir = %self.config.female_dir.display(),
            records = records.len(),
            "Collected audio records from source folders"
        );

        Ok(records)
    }
}
