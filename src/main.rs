//! SrtScribe CLI entry point

use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use srt_scribe::cli::{
    app::{load_merged_config, run_generate, EXIT_ERROR, EXIT_USAGE_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    logging::init_logging,
    presenter::Presenter,
    GenerateOptions,
};
use srt_scribe::domain::config::AppConfig;
use srt_scribe::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let presenter = Presenter::new();

    // Handle subcommands
    if let Some(Commands::Config { action }) = cli.command {
        let store = XdgConfigStore::new();
        if let Err(e) = handle_config_command(action, &store, &presenter).await {
            presenter.error(&e.to_string());
            return ExitCode::from(EXIT_ERROR);
        }
        return ExitCode::SUCCESS;
    }

    let Some(audio) = cli.audio else {
        let _ = Cli::command().print_help();
        return ExitCode::from(EXIT_USAGE_ERROR);
    };

    // Build CLI config from args
    let cli_config = AppConfig {
        api_key: None, // API key comes from env/file only
        language: cli.language,
        model: cli.model,
    };

    let config = load_merged_config(cli_config).await;

    let options = GenerateOptions {
        audio,
        mime_type: cli.mime_type,
        output: cli.output,
    };

    run_generate(options, config).await
}
