//! Filesystem audio source adapter

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::AudioSource;
use crate::domain::error::EncodeError;
use crate::domain::transcription::{AudioData, AudioMimeType};

/// Audio file on disk with a declared media type
#[derive(Debug, Clone)]
pub struct FileAudioSource {
    path: PathBuf,
    mime_type: AudioMimeType,
}

impl FileAudioSource {
    /// Open a file, declaring its type from the file extension.
    ///
    /// Nothing is read until [`AudioSource::read`] is called.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self, EncodeError> {
        let path = path.into();
        let mime_type = AudioMimeType::from_path(&path)?;
        Ok(Self { path, mime_type })
    }

    /// Open a file with an explicitly declared media type
    pub fn with_mime_type(path: impl Into<PathBuf>, mime_type: AudioMimeType) -> Self {
        Self {
            path: path.into(),
            mime_type,
        }
    }

    /// Path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Declared media type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }
}

#[async_trait]
impl AudioSource for FileAudioSource {
    async fn read(&self) -> Result<AudioData, EncodeError> {
        let data = fs::read(&self.path)
            .await
            .map_err(|e| EncodeError::Read(format!("{}: {}", self.path.display(), e)))?;

        Ok(AudioData::new(data, self.mime_type))
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}
