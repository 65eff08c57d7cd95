//! Transport-safe audio payload

use crate::domain::error::EncodeError;

use super::audio_data::AudioData;

/// Base64 audio plus its declared media type, ready to be inlined in a request.
///
/// `data` never carries the `data:<mime>;base64,` preamble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    data: String,
    mime_type: String,
}

impl AudioPayload {
    /// Encode audio bytes into a payload.
    ///
    /// The bytes go through the data-URL form and the preamble is stripped,
    /// so the payload is exactly what a data URL would carry after its comma.
    pub fn encode(audio: &AudioData) -> Result<Self, EncodeError> {
        let url = audio.to_data_url();
        let (_, data) = Self::split_data_url(&url)?;
        Ok(Self {
            data: data.to_string(),
            mime_type: audio.mime_type().to_string(),
        })
    }

    /// Build a payload from an existing data URL.
    ///
    /// The mime type is taken from the URL header.
    pub fn from_data_url(url: &str) -> Result<Self, EncodeError> {
        let (header, data) = Self::split_data_url(url)?;
        let mime_type = header
            .trim_start_matches("data:")
            .trim_end_matches(";base64")
            .to_string();
        Ok(Self {
            data: data.to_string(),
            mime_type,
        })
    }

    /// Split a base64 data URL at its first comma into (header, payload).
    fn split_data_url(url: &str) -> Result<(&str, &str), EncodeError> {
        let (header, data) = url.split_once(',').ok_or_else(|| {
            EncodeError::Format(
                "expected textual data-URL encoding, got other representation".to_string(),
            )
        })?;
        if !header.starts_with("data:") || !header.ends_with(";base64") {
            return Err(EncodeError::Format(format!(
                "expected a base64 data URL, got header \"{}\"",
                header
            )));
        }
        Ok((header, data))
    }

    /// Base64 payload
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Declared media type
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}
