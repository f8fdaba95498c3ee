//! Error types for the command-line front end.

use poisson_core::PoissonError;
use thiserror::Error;

/// Errors that abort a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The core rejected or failed the computation
    #[error(transparent)]
    Poisson(#[from] PoissonError),
    
    /// JSON encoding failed
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
    
    /// Writing to stdout failed
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
    
    /// The tracing subscriber could not be installed
    #[error("Logging setup error: {0}")]
    Logging(String),
}
