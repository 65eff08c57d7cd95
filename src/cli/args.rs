//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use crate::domain::transcription::AudioMimeType;

/// SrtScribe - AI-generated SRT subtitles for audio files
#[derive(Parser, Debug)]
#[command(name = "srt-scribe")]
#[command(version)]
#[command(about = "Generate SRT subtitles from an audio file using Google Gemini")]
#[command(long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Audio file to transcribe (wav, mp3, aiff, aac, ogg, flac, webm, m4a)
    #[arg(value_name = "AUDIO")]
    pub audio: Option<PathBuf>,

    /// Subtitle language (e.g., English, French, Japanese)
    #[arg(short = 'l', long, value_name = "LANG")]
    pub language: Option<String>,

    /// Gemini model to use
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Declared media type of the audio (default: derived from the file extension)
    #[arg(long, value_name = "TYPE", value_parser = parse_mime_type)]
    pub mime_type: Option<AudioMimeType>,

    /// Write subtitles to this file instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Parsed options for a subtitle run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub audio: PathBuf,
    pub mime_type: Option<AudioMimeType>,
    pub output: Option<PathBuf>,
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "language", "model"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

fn parse_mime_type(value: &str) -> Result<AudioMimeType, String> {
    value.parse::<AudioMimeType>().map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["srt-scribe", "talk.mp3"]);
        assert_eq!(cli.audio, Some(PathBuf::from("talk.mp3")));
        assert!(cli.language.is_none());
        assert!(cli.model.is_none());
        assert!(cli.mime_type.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_language_and_model() {
        let cli = Cli::parse_from(["srt-scribe", "-l", "French", "-m", "gemini-2.5-flash", "a.wav"]);
        assert_eq!(cli.language, Some("French".to_string()));
        assert_eq!(cli.model, Some("gemini-2.5-flash".to_string()));
    }

    #[test]
    fn cli_parses_mime_type() {
        let cli = Cli::parse_from(["srt-scribe", "--mime-type", "audio/flac", "recording"]);
        assert_eq!(cli.mime_type, Some(AudioMimeType::Flac));
    }

    #[test]
    fn cli_rejects_unknown_mime_type() {
        let result = Cli::try_parse_from(["srt-scribe", "--mime-type", "video/avi", "a.avi"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_output_and_verbosity() {
        let cli = Cli::parse_from(["srt-scribe", "-o", "out.srt", "-vv", "a.ogg"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.srt")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn cli_parses_config_init() {
        let cli = Cli::parse_from(["srt-scribe", "config", "init"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["srt-scribe", "config", "set", "language", "German"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "language");
            assert_eq!(value, "German");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("language"));
        assert!(is_valid_config_key("model"));
        assert!(!is_valid_config_key("duration"));
    }

    #[test]
    fn verify_cli() {
        // Verify the CLI definition is valid
        Cli::command().debug_assert();
    }
}
