//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the filesystem, the Gemini API, and the config file.

pub mod audio;
pub mod config;
pub mod generative;

// Re-export adapters
pub use audio::FileAudioSource;
pub use config::XdgConfigStore;
pub use generative::GeminiModel;
