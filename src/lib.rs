//! TnP job specification toolkit
//!
//! Typed, self-validating builders for transcode-and-package job
//! specifications, plus the endpoint templates and request assembly a client
//! needs to submit them to the processing service.
//!
//! # Usage
//!
//! ```bash
//! tnp validate --spec job.yaml
//! tnp --site-id SITE render --spec job.json --pretty
//! tnp --site-id SITE endpoint job-detail SITE 42
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod endpoint;
pub mod error;
pub mod request;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use domain::errors::{DomainError, ErrorCode};
pub use domain::model::{Input, Job, Output, Region, Transcoding};
pub use endpoint::{BoundEndpoint, Endpoint, HttpMethod};
pub use error::{EndpointError, TnpError, TnpResult};
pub use request::ApiRequest;
