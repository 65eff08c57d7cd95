//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_source;
pub mod config;
pub mod generative_model;

// Re-export common types
pub use audio_source::AudioSource;
pub use config::ConfigStore;
pub use generative_model::{GenerativeModel, ModelError};
