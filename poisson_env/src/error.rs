//! Error types for the entropy abstraction.

use thiserror::Error;

/// Errors that can occur while drawing a fresh seed.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The operating system refused to provide entropy
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),
    
    /// A scripted source ran out of seeds
    #[error("Entropy source exhausted after {0} seeds")]
    Exhausted(usize),
}

impl EnvError {
    /// Creates an entropy-unavailable error.
    pub fn unavailable(msg: impl std::fmt::Display) -> Self {
        Self::EntropyUnavailable(msg.to_string())
    }
}
