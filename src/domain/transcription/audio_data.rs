//! Audio data value object

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::domain::error::UnsupportedFormatError;

/// Audio MIME types accepted by the Gemini API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioMimeType {
    Wav,
    Mp3,
    Mpeg,
    Aiff,
    Aac,
    Ogg,
    Flac,
    Webm,
    Mp4,
}

impl AudioMimeType {
    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "audio/wav",
            Self::Mp3 => "audio/mp3",
            Self::Mpeg => "audio/mpeg",
            Self::Aiff => "audio/aiff",
            Self::Aac => "audio/aac",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Webm => "audio/webm",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Guess the MIME type from a file extension (case-insensitive, no dot)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim().to_lowercase().as_str() {
            "wav" | "wave" => Some(Self::Wav),
            "mp3" | "mpeg" | "mpga" => Some(Self::Mpeg),
            "aif" | "aiff" => Some(Self::Aiff),
            "aac" => Some(Self::Aac),
            "ogg" | "oga" | "opus" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "webm" => Some(Self::Webm),
            "mp4" | "m4a" => Some(Self::Mp4),
            _ => None,
        }
    }

    /// Guess the MIME type from a file path's extension
    pub fn from_path(path: &Path) -> Result<Self, UnsupportedFormatError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| UnsupportedFormatError {
                input: path.display().to_string(),
            })
    }
}

impl FromStr for AudioMimeType {
    type Err = UnsupportedFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "audio/wav" | "audio/x-wav" | "audio/wave" => Ok(Self::Wav),
            "audio/mp3" => Ok(Self::Mp3),
            "audio/mpeg" => Ok(Self::Mpeg),
            "audio/aiff" | "audio/x-aiff" => Ok(Self::Aiff),
            "audio/aac" => Ok(Self::Aac),
            "audio/ogg" => Ok(Self::Ogg),
            "audio/flac" | "audio/x-flac" => Ok(Self::Flac),
            "audio/webm" => Ok(Self::Webm),
            "audio/mp4" | "audio/x-m4a" => Ok(Self::Mp4),
            _ => Err(UnsupportedFormatError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw audio bytes read from a source, with the media type the source declares.
#[derive(Debug, Clone)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioData {
    /// Create AudioData from raw bytes
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Get the raw audio data
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Get the declared MIME type
    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    /// Get the size in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }

    /// Render the audio as a `data:<mime>;base64,<payload>` URL
    pub fn to_data_url(&self) -> String {
        use base64::Engine;
        format!(
            "data:{};base64,{}",
            self.mime_type,
            base64::engine::general_purpose::STANDARD.encode(&self.data)
        )
    }
}
