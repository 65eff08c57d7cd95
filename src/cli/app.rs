//! Main app runner for subtitle generation

use std::env;
use std::process::ExitCode;

use tokio::fs;

use crate::application::ports::ConfigStore;
use crate::application::GenerateSubtitlesUseCase;
use crate::domain::config::AppConfig;
use crate::infrastructure::{FileAudioSource, GeminiModel, XdgConfigStore};

use super::args::GenerateOptions;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Environment variables checked for the API key, in order
pub const API_KEY_ENV_VARS: &[&str] = &["API_KEY", "GEMINI_API_KEY"];

/// Generate subtitles for one audio file
pub async fn run_generate(options: GenerateOptions, config: AppConfig) -> ExitCode {
    let mut presenter = Presenter::new();
    let language = config.language_or_default().to_string();

    // The credential is checked before the audio is touched
    let use_case = match GenerateSubtitlesUseCase::connect(
        &config.generator_config(),
        |api_key, model| GeminiModel::with_model(api_key, model),
    ) {
        Ok(use_case) => use_case,
        Err(e) => {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let source = match options.mime_type {
        Some(mime_type) => FileAudioSource::with_mime_type(&options.audio, mime_type),
        None => match FileAudioSource::from_path(&options.audio) {
            Ok(source) => source,
            Err(e) => {
                presenter.error(&format!("{} (use --mime-type to declare it)", e));
                return ExitCode::from(EXIT_USAGE_ERROR);
            }
        },
    };

    tracing::info!(
        audio = %source.path().display(),
        mime_type = %source.mime_type(),
        model = %config.model_or_default(),
        "Starting subtitle generation"
    );

    presenter.start_spinner(&format!("Generating {} subtitles...", language));

    let srt = match use_case.execute(&source, &language).await {
        Ok(srt) => srt,
        Err(e) => {
            presenter.spinner_fail("Subtitle generation failed");
            presenter.error(&e.render());
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let summary = presenter.format_summary(&srt);
    presenter.spinner_success(&summary);

    match options.output {
        Some(path) => {
            if let Err(e) = fs::write(&path, format!("{}\n", srt)).await {
                presenter.error(&format!("Failed to write {}: {}", path.display(), e));
                return ExitCode::from(EXIT_ERROR);
            }
            presenter.info(&format!("Saved to {}", path.display()));
        }
        None => presenter.output(&srt),
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// API key from the environment, if any
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .find(|key| !key.is_empty())
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli_config: AppConfig) -> AppConfig {
    let file_config = XdgConfigStore::new().load_or_empty().await;

    // Build env config
    let env_config = AppConfig {
        api_key: api_key_from_env(),
        ..Default::default()
    };

    // Merge: defaults < file < env < cli
    AppConfig::defaults()
        .merge(file_config)
        .merge(env_config)
        .merge(cli_config)
}
