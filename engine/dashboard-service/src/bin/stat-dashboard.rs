//! # Stat Dashboard Binary
//!
//! Command-line entry point for building dashboard views.

use anyhow::Result;
use clap::Parser;
use dashboard_service::cli::{Cli, CliHandler};
use dashboard_service::{initialize_logging, DashboardConfig, DashboardService, DatasetSource};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(dataset) = cli.dataset {
        config.dataset.path = dataset;
    }

    initialize_logging(&config.logging);

    let source = DatasetSource::load(&config.dataset.path).await?;
    let service = DashboardService::new(source, config.engine)?;

    // Handle command
    CliHandler::new(service).handle_command(cli.command).await?;

    Ok(())
}
