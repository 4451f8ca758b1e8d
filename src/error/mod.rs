//! Error handling module for TnP

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Failures while binding an endpoint template
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EndpointError {
    /// Placeholder count and argument count differ
    #[error(
        "The number of parameters required by the URL pattern does not match the number of provided parameters. \
         Expected parameters: {expected}, Provided parameters: {provided}"
    )]
    ArityMismatch { expected: usize, provided: usize },

    /// An explicit `%N$s` index points past the argument list
    #[error("URL pattern references parameter {index} but only {provided} were provided")]
    MissingArgument { index: usize, provided: usize },

    /// Name not present in the endpoint registry
    #[error("Unknown endpoint: {name}")]
    UnknownEndpoint { name: String },
}

/// Main error type for TnP operations
#[derive(Error, Debug)]
pub enum TnpError {
    /// A job specification violated a construction rule
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// Endpoint template binding failed
    #[error("{0}")]
    Endpoint(#[from] EndpointError),

    /// Encoding or decoding a job specification failed
    #[error("Failed to process job specification: {message}")]
    Codec { message: String },

    /// Configuration could not be loaded or is inconsistent
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for TnpError {
    fn from(err: serde_json::Error) -> Self {
        TnpError::Codec {
            message: err.to_string(),
        }
    }
}

/// Result type alias for TnP operations
pub type TnpResult<T> = std::result::Result<T, TnpError>;
