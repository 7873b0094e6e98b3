mod app;
mod cli;
mod config;
mod error;
mod geo_location;
mod ip_lookup;
mod prayer_times;
mod time_format;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::{cli::Args, config::Config, error::AppError};

/// Parses the command line, loads configuration and runs the lookup pipeline once.
/// Usage errors go to stdout and exit successfully; any other failure is reported on
/// stderr with a non-zero exit status.
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::from_env();
    debug!("Arguments: {:?}", args);

    let mut stdout = std::io::stdout().lock();
    match app::run(&args, &config, &mut stdout).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(AppError::Usage(usage)) => {
            writeln!(stdout, "{}", usage).context("failed to print usage")?;
            stdout.flush().context("failed to print usage")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            error!("Lookup failed: {}", e);
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}
