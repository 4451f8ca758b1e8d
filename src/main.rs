//! TnP job specification toolkit
//!
//! ```bash
//! tnp validate --spec job.yaml
//! tnp --site-id SITE render --spec job.json
//! tnp endpoint stop-job SITE 42
//! tnp regions
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use tnp_cli::cli::{commands, Cli, Commands};
use tnp_cli::config::Settings;
use tnp_cli::utils::logging::init_logging;

/// Main entry point for the TnP CLI
fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref(), &cli.overrides())
        .context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&settings.logging());
    info!(base_url = %settings.api_base_url, "Starting TnP CLI");

    // Execute the requested command
    match cli.command {
        Commands::Validate(args) => {
            info!("Executing validate command");
            commands::validate(args)?;
        }
        Commands::Render(args) => {
            info!("Executing render command");
            commands::render(args, &settings)?;
        }
        Commands::Endpoint(args) => {
            info!("Executing endpoint command");
            commands::endpoint(args, &settings)?;
        }
        Commands::Regions => commands::regions(&settings)?,
    }

    info!("TnP CLI completed successfully");
    Ok(())
}
