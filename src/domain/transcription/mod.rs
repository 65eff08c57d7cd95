//! Transcription domain module

mod audio_data;
mod audio_payload;
mod subtitle_prompt;

pub use audio_data::{AudioData, AudioMimeType};
pub use audio_payload::AudioPayload;
pub use subtitle_prompt::{SubtitlePrompt, SYSTEM_INSTRUCTION};
