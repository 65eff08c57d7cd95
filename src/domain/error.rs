//! Domain error types

use thiserror::Error;

/// Error when a file or MIME type is not a supported audio format
#[derive(Debug, Clone, Error)]
#[error("Unsupported audio format: \"{input}\". Supported: wav, mp3, aiff, aac, ogg, flac, webm, m4a")]
pub struct UnsupportedFormatError {
    pub input: String,
}

/// Required credential is absent
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("API_KEY environment variable not set.")]
    MissingApiKey,
}

/// Error while turning an audio source into a payload
#[derive(Debug, Clone, Error)]
pub enum EncodeError {
    #[error("Failed to read audio: {0}")]
    Read(String),

    #[error("{0}")]
    Format(String),

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
