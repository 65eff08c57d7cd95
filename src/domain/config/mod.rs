//! Configuration domain module

mod app_config;

pub use app_config::{AppConfig, GeneratorConfig, DEFAULT_LANGUAGE, DEFAULT_MODEL};
