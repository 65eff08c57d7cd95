//! Generate subtitles use case

use thiserror::Error;

use crate::domain::config::GeneratorConfig;
use crate::domain::error::{ConfigurationError, EncodeError};
use crate::domain::transcription::{AudioPayload, SubtitlePrompt, SYSTEM_INSTRUCTION};

use super::ports::{AudioSource, GenerativeModel, ModelError};

/// Prefix of every rendered failure message
pub const ERROR_PREFIX: &str = "An error occurred: ";

/// Rendered when a failure carries no message
pub const UNKNOWN_ERROR_MESSAGE: &str = "產生字幕時發生未知錯誤。";

/// Errors from the generate use case
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl GenerateError {
    /// Render as a single user-facing line
    pub fn render(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            format!("{}{}", ERROR_PREFIX, message)
        }
    }
}

/// Collapse a typed outcome into one string: the transcript or the rendered error.
pub fn render_outcome(result: Result<String, GenerateError>) -> String {
    match result {
        Ok(srt) => srt,
        Err(e) => e.render(),
    }
}

/// Audio-to-SRT use case
pub struct GenerateSubtitlesUseCase<M>
where
    M: GenerativeModel,
{
    model: M,
}

impl<M> GenerateSubtitlesUseCase<M>
where
    M: GenerativeModel,
{
    /// Create a use case around an already connected model
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Check the credential, then build the model with it.
    ///
    /// `connect` receives the API key and model name and is never called
    /// when the key is missing.
    pub fn connect<F>(config: &GeneratorConfig, connect: F) -> Result<Self, ConfigurationError>
    where
        F: FnOnce(&str, &str) -> M,
    {
        let api_key = config.require_api_key()?;
        Ok(Self::new(connect(api_key, &config.model)))
    }

    /// Generate an SRT transcript for the source in the given language.
    ///
    /// The returned text is trimmed but otherwise exactly what the model produced.
    pub async fn execute<S>(&self, source: &S, language: &str) -> Result<String, GenerateError>
    where
        S: AudioSource + ?Sized,
    {
        let audio = source.read().await?;
        tracing::debug!(
            source = %source.name(),
            mime_type = %audio.mime_type(),
            size = %audio.human_readable_size(),
            "Audio read"
        );

        let payload = AudioPayload::encode(&audio)?;
        drop(audio);

        let prompt = SubtitlePrompt::build(language);

        tracing::info!(%language, "Requesting subtitles");
        let text = self
            .model
            .infer(prompt.content(), SYSTEM_INSTRUCTION, &payload)
            .await?;

        let srt = text.trim().to_string();
        tracing::info!(chars = srt.len(), "Subtitles generated");
        Ok(srt)
    }

    /// Like [`execute`](Self::execute), but failures come back as a rendered message.
    pub async fn execute_to_text<S>(&self, source: &S, language: &str) -> String
    where
        S: AudioSource + ?Sized,
    {
        let result = self.execute(source, language).await;
        if let Err(ref e) = result {
            tracing::error!(error = %e, "Error generating subtitles");
        }
        render_outcome(result)
    }
}

/// One-call entry point with a single-string result.
///
/// Only a missing credential is returned as an error; every other failure is
/// rendered into the returned string (see [`GenerateError::render`]).
pub async fn generate_srt<M, S, F>(
    config: &GeneratorConfig,
    connect: F,
    source: &S,
    language: &str,
) -> Result<String, ConfigurationError>
where
    M: GenerativeModel,
    S: AudioSource + ?Sized,
    F: FnOnce(&str, &str) -> M,
{
    let use_case = GenerateSubtitlesUseCase::connect(config, connect)?;
    Ok(use_case.execute_to_text(source, language).await)
}
