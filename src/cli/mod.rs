//! CLI module for TnP
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::SettingsLayer;

pub mod args;
pub mod commands;

pub use args::{EndpointArgs, RenderArgs, ValidateArgs};

/// TnP job specification toolkit
///
/// Validates transcode-and-package job specifications and renders the
/// requests a client would send to the processing service.
#[derive(Parser, Debug)]
#[command(name = "tnp")]
#[command(about = "TnP job specification toolkit - validate and render transcode-and-package jobs")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to tnp.toml or config/tnp.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log output format (pretty, compact, json)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Base URL of the processing service
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Site identifier used in endpoint paths
    #[arg(long, global = true)]
    pub site_id: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a job specification and check every construction rule
    Validate(ValidateArgs),
    /// Print the create-job request for a job specification
    Render(RenderArgs),
    /// Bind an endpoint template and print the resulting request line
    Endpoint(EndpointArgs),
    /// List the service regions
    Regions,
}

impl Cli {
    /// Settings supplied through global flags
    pub fn overrides(&self) -> SettingsLayer {
        SettingsLayer {
            api_base_url: self.base_url.clone(),
            site_id: self.site_id.clone(),
            region: None,
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
        }
    }
}
