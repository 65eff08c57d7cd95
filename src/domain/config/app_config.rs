//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigurationError;

/// Default subtitle language
pub const DEFAULT_LANGUAGE: &str = "English";

/// Default Gemini model
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub model: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            api_key: None,
            language: Some(DEFAULT_LANGUAGE.to_string()),
            model: Some(DEFAULT_MODEL.to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            api_key: other.api_key.or(self.api_key),
            language: other.language.or(self.language),
            model: other.model.or(self.model),
        }
    }

    /// Get the subtitle language, or English if not set
    pub fn language_or_default(&self) -> &str {
        self.language
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    /// Get the model name, or the default model if not set
    pub fn model_or_default(&self) -> &str {
        self.model
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(DEFAULT_MODEL)
    }

    /// Settings the subtitle generator needs, taken from this config
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            model: self.model_or_default().to_string(),
        }
    }
}

/// Explicit settings for connecting to the generative model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub api_key: Option<String>,
    pub model: String,
}

impl GeneratorConfig {
    /// Create a config with the default model
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// The credential, or a configuration error if it is absent
    pub fn require_api_key(&self) -> Result<&str, ConfigurationError> {
        self.api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(ConfigurationError::MissingApiKey)
    }
}
