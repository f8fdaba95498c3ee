//! Error types for Poisson process evaluation and sampling.

use poisson_env::EnvError;
use thiserror::Error;

/// Errors produced by the core library.
///
/// In permissive mode only the last four variants can occur; numeric
/// arguments are never rejected.
#[derive(Debug, Error)]
pub enum PoissonError {
    /// A numeric argument failed strict validation
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    
    /// Poisson sampling was asked for an infinite mean
    #[error("Cannot sample a Poisson count with unbounded mean {0}")]
    UnboundedMean(f64),
    
    /// A sampled Poisson count does not fit in a `u64`
    #[error("Sampled Poisson count {variate} for mean {mean} exceeds the 64-bit count range")]
    CountOverflow { mean: f64, variate: f64 },
    
    /// The distribution crate rejected a parameter
    #[error("Distribution error: {0}")]
    Distribution(String),
    
    /// Fresh seed could not be drawn for seed 0
    #[error(transparent)]
    Entropy(#[from] EnvError),
}

impl PoissonError {
    /// Creates an invalid-parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter { name, value, reason }
    }
    
    /// Creates a distribution error.
    pub fn distribution(err: impl std::fmt::Display) -> Self {
        Self::Distribution(err.to_string())
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PoissonError>;
