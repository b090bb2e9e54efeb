//! shiftcal CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use shiftcal_cli::cli::{Cli, Command, ConfigAction};
use shiftcal_cli::commands;
use shiftcal_cli::config::ClientConfig;
use shiftcal_cli::error::{ClientError, ClientResult};
use shiftcal_core::{TracingConfig, TracingOutputFormat, init_tracing};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the configuration file.
///
/// An explicit `--config` path must load; a broken default file only warns.
fn load_config(cli: &Cli) -> ClientResult<(ClientConfig, PathBuf, Option<String>)> {
    match cli.config {
        Some(ref path) => {
            let config = ClientConfig::load_from(path).map_err(ClientError::Config)?;
            Ok((config, path.clone(), None))
        }
        None => match ClientConfig::load() {
            Ok(config) => Ok((config, ClientConfig::default_path(), None)),
            Err(e) => Ok((ClientConfig::default(), ClientConfig::default_path(), Some(e))),
        },
    }
}

fn run(cli: Cli) -> ClientResult<()> {
    let (mut config, config_path, load_warning) = load_config(&cli)?;
    config.apply_overrides(&cli)?;

    // Initialize tracing
    let tracing_config = if config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::cli()
    };
    let tracing_config = match cli.log_format {
        Some(format) => tracing_config.with_format(TracingOutputFormat::from(format)),
        None => tracing_config,
    };
    if let Err(e) = init_tracing(tracing_config) {
        eprintln!("warning: failed to initialize logging: {}", e);
    }

    if let Some(e) = load_warning {
        warn!(path = %config_path.display(), error = %e, "Ignoring config file, using defaults");
    }

    match cli.command {
        Command::Names { file } => commands::names::run(&file),
        Command::Shifts { file, worker, json } => {
            commands::shifts::run(&file, worker.as_deref(), json, &config)
        }
        Command::Export {
            file,
            worker,
            title,
            output,
        } => commands::export::run(&file, &worker, title.as_deref(), output.as_deref(), &config),
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config, &config_path),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}
