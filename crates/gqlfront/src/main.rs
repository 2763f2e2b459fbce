mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;
mod schema_files;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

// Schema files are read and merged one after another.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd.take() {
        Some(command) => command.run(&cli).await.report(),
        None => match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                ExitCode::FAILURE
            },
        },
    }
}

/// `-v` forces `DEBUG`; otherwise the `LOG_LEVEL` environment variable
/// picks the level. Log output goes to stderr so it never mixes with
/// printed schemas.
fn init_logging(verbose: bool) {
    let mut rejected_env_value = None;
    let log_level = if verbose {
        tracing::Level::DEBUG
    } else {
        match std::env::var("LOG_LEVEL") {
            Ok(value) => parse_log_level(&value).unwrap_or_else(|| {
                rejected_env_value = Some(value);
                DEFAULT_LOG_LEVEL
            }),
            Err(_) => DEFAULT_LOG_LEVEL,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(value) = rejected_env_value {
        log::warn!(
            "Ignoring invalid `LOG_LEVEL` environment variable value `{}`.",
            value.trim(),
        );
    }
}

/// Case-insensitive level name; `verbose` is accepted as `debug`.
fn parse_log_level(value: &str) -> Option<tracing::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(tracing::Level::TRACE),
        "debug" | "verbose" => Some(tracing::Level::DEBUG),
        "info" => Some(tracing::Level::INFO),
        "warn" => Some(tracing::Level::WARN),
        "error" => Some(tracing::Level::ERROR),
        _ => None,
    }
}
