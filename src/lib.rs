//! SrtScribe - AI-generated SRT subtitles
//!
//! This crate turns an audio file into an SRT subtitle transcript by sending
//! it, together with a subtitle-formatting instruction, to Google Gemini.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Audio payloads, the subtitle prompt, configuration, and errors
//! - **Application**: The generate use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (file source, Gemini, config file)
//! - **CLI**: Command-line interface, argument parsing, and logging setup

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
