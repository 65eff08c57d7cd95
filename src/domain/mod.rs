//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod transcription;

// Re-export common types
pub use config::{AppConfig, GeneratorConfig};
pub use error::*;
pub use transcription::{AudioData, AudioMimeType, AudioPayload, SubtitlePrompt};
