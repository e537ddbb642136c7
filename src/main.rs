//! Pullsift CLI entrypoint for filtered pull request queries.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use pullsift::{PullsiftConfig, QueryError};
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ignored = writeln!(io::stderr().lock(), "error: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), QueryError> {
    let config = load_config()?;

    if config.describe_schema {
        let mut stdout = io::stdout().lock();
        return cli::output::write_schema_to(&mut stdout);
    }

    cli::query::run(&config).await
}

/// Installs a stderr `fmt` subscriber filtered by `RUST_LOG`, warnings by
/// default.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`QueryError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<PullsiftConfig, QueryError> {
    PullsiftConfig::load().map_err(|error| QueryError::Configuration {
        message: error.to_string(),
    })
}
