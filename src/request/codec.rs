//! Job specification encoding and decoding
//!
//! Decoding always goes through the entity builders, so a file that parses
//! but breaks a construction rule fails with the same error as hand-built
//! input.

use std::path::Path;

use tracing::debug;

use crate::domain::model::Job;
use crate::error::{TnpError, TnpResult};

/// Source formats accepted for job specification files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Json,
    Yaml,
    Toml,
}

impl SpecFormat {
    /// Pick a format from the file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("yaml") | Some("yml") => SpecFormat::Yaml,
            Some("toml") => SpecFormat::Toml,
            _ => SpecFormat::Json,
        }
    }
}

/// Compact JSON, as sent in a request body
pub fn to_json(job: &Job) -> TnpResult<String> {
    Ok(serde_json::to_string(job)?)
}

pub fn to_json_pretty(job: &Job) -> TnpResult<String> {
    Ok(serde_json::to_string_pretty(job)?)
}

pub fn from_json(text: &str) -> TnpResult<Job> {
    Ok(serde_json::from_str(text)?)
}

/// Decode a job from text in the given format
pub fn decode(text: &str, format: SpecFormat) -> TnpResult<Job> {
    match format {
        SpecFormat::Json => from_json(text),
        SpecFormat::Yaml => serde_yaml::from_str(text).map_err(|e| TnpError::Codec {
            message: e.to_string(),
        }),
        SpecFormat::Toml => toml::from_str(text).map_err(|e| TnpError::Codec {
            message: e.to_string(),
        }),
    }
}

/// Read and validate a job specification file
pub fn load_job(path: impl AsRef<Path>) -> TnpResult<Job> {
    let path = path.as_ref();
    let format = SpecFormat::from_path(path);
    debug!(path = %path.display(), ?format, "Loading job specification");

    let text = std::fs::read_to_string(path)?;
    decode(&text, format)
}
