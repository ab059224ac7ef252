//! Sewing advisor command-line entry point.
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Loadout, Recommend, Regen};
use config::CliConfig;
use sewing_core::{InputError, SewingError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Recommends the next sewing action
#[derive(Parser)]
#[command(name = "sewing")]
#[command(about = "Sewing minigame advisor", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Recommend the best action for a turn
    Recommend(Recommend),

    /// Show max concentration and critical rate for a loadout
    Loadout(Loadout),

    /// Show the regeneration notice for a turn
    Regen(Regen),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = setup_logging(&config)?;

    let result = match cli.command {
        Command::Recommend(cmd) => cmd.execute(&config),
        Command::Loadout(cmd) => cmd.execute(),
        Command::Regen(cmd) => cmd.execute(),
    };

    if let Some(err) = result.as_ref().err().and_then(|e| e.downcast_ref::<InputError>()) {
        tracing::debug!(
            "Input rejected: code={} severity={}",
            err.error_code(),
            err.severity().as_str()
        );
    }

    result
}

/// Setup logging to stderr, plus a log file when `SEWING_LOG_DIR` is set.
fn setup_logging(config: &CliConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;
            let file_appender = tracing_appender::rolling::never(log_dir, "sewing.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if let Some(log_dir) = &config.log_dir {
        tracing::info!("Log file: {}/sewing.log", log_dir.display());
    }

    Ok(guard)
}
