//! Generative model port interface

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::transcription::AudioPayload;

/// Errors surfaced by the generative model
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited,

    #[error("Empty model response")]
    EmptyResponse,

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error message reported by the API itself
    #[error("{0}")]
    ApiError(String),

    /// Failure that carries no usable message
    #[error("")]
    Unknown,
}

/// Port for a multimodal model that turns text plus audio into text
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// Run one inference call.
    ///
    /// # Arguments
    /// * `instruction` - The user instruction
    /// * `system_instruction` - Fixed instruction constraining the output
    /// * `audio` - The encoded audio
    ///
    /// # Returns
    /// The generated text, untrimmed
    async fn infer(
        &self,
        instruction: &str,
        system_instruction: &str,
        audio: &AudioPayload,
    ) -> Result<String, ModelError>;
}
