/// NASA API explorer entry point
mod cli;
mod clients;
mod config;
mod domain;
mod errors;
mod extract;
mod projection;
mod repo;
mod services;
mod utils;
mod validation;

use crate::cli::{dispatch, Cli};
use crate::clients::NasaClient;
use crate::config::AppConfig;
use crate::repo::OutputRepo;
use crate::services::ExplorerService;
use chrono::Local;
use clap::{CommandFactory, Parser};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    // Load configuration
    let config = AppConfig::from_env()?;
    debug!(
        api_url = %config.nasa_api_url,
        output_dir = %config.output_dir.display(),
        "Configuration loaded"
    );

    let Some(request) = cli.request() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let client = NasaClient::new(&config)?;
    let repo = OutputRepo::new(&config.output_dir);
    let service = ExplorerService::new(client, repo);

    let outcome = dispatch(&request, &service, Local::now().date_naive()).await;
    info!(
        success = outcome.success(),
        outcome = ?outcome.outcome,
        status = ?outcome.http_status_code,
        "Operation finished"
    );
    println!("{}", outcome.message);

    if outcome.failed() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
