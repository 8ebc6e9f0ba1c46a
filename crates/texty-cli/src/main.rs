mod commands;
mod error;
mod notify;
mod select;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Mutex;
use tracing::debug;

use crate::commands::{completions, convert, phones, Context};
use crate::error::{exit_code_for, failure_message};
use crate::notify::{notifier_for, Status};
use texty_config as config;

#[derive(Debug, Parser)]
#[command(name = "texty", version, about = "texty CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    /// Append log output to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Convert a contact export into the twelve-column import layout
    Convert(convert::ConvertArgs),
    /// Write a deduplicated list of phone numbers
    Phones(phones::PhonesArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    let notifier = notifier_for(cli.json);
    match run(cli, notifier.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let status = Status::failure(failure_message(&err, verbose));
            if let Err(notify_err) = notifier.notify(&status) {
                debug!(error = %notify_err, "failed to report error");
            }
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli, notifier: &dyn notify::Notifier) -> Result<()> {
    let Cli {
        config: config_path,
        json: _,
        verbose,
        log_file,
        command,
    } = cli;

    match command {
        Command::Completions(args) => {
            init_logging(verbose, log_file.as_deref())?;
            completions::emit(args)
        }
        command => {
            let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
            let log_file = log_file.or_else(|| app_config.log_file.clone());
            init_logging(verbose, log_file.as_deref())?;
            if verbose {
                match config::resolve_config_path(config_path.clone()) {
                    Ok(path) => {
                        if path.exists() {
                            debug!(path = %path.display(), "config resolved");
                        } else {
                            debug!(path = %path.display(), "config missing, using defaults");
                        }
                    }
                    Err(err) => {
                        debug!(error = %err, "config unavailable");
                    }
                }
            }

            let ctx = Context {
                config: &app_config,
                notifier,
            };

            match command {
                Command::Convert(args) => convert::convert(&ctx, args),
                Command::Phones(args) => phones::phones(&ctx, args),
                Command::Completions(_) => {
                    unreachable!("completions command handled before config is loaded")
                }
            }
        }
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            let _ = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = fmt()
                .with_env_filter(filter)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}
