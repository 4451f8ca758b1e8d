//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the validate command
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Job specification file (.json, .yaml/.yml or .toml)
    #[arg(short, long)]
    pub spec: PathBuf,
}

/// Arguments for the render command
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Job specification file (.json, .yaml/.yml or .toml)
    #[arg(short, long)]
    pub spec: PathBuf,

    /// Pretty-print the request body
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the endpoint command
#[derive(Args, Debug)]
pub struct EndpointArgs {
    /// Endpoint name (auth-token, create-job, list-jobs, job-detail, stop-job, restart-job)
    pub name: String,

    /// Positional parameters, in template order
    pub params: Vec<String>,
}
