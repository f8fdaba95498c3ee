//! Validation Module - Parameter Modes for Poisson Process Inputs
//! ==============================================================
//!
//! The formulas accept any real rate and duration. Out-of-range values
//! flow straight through and give meaningless but non-crashing answers
//! (a "probability" above 1, a negative arrival time). That is the
//! `Permissive` mode and the default.
//!
//! `Strict` mode fails fast instead:
//! - `rate < 0` or non-finite
//! - `duration < 0` or non-finite
//!
//! Usage:
//! ```
//! use poisson_core::validation::{ParameterMode, ProcessConfig};
//!
//! let config = ProcessConfig::strict();
//! assert!(config.check_rate(-1.0).is_err());
//! assert!(ProcessConfig::default().check_rate(-1.0).is_ok());
//! assert_eq!(ProcessConfig::default().mode, ParameterMode::Permissive);
//! ```

use crate::error::{PoissonError, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// PARAMETER MODE
// =============================================================================

/// How numeric inputs are treated before they reach the formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterMode {
    /// Accept every input, compute whatever the formula yields
    #[default]
    Permissive,
    
    /// Reject negative or non-finite rates and durations
    Strict,
}

impl ParameterMode {
    /// Returns the mode name.
    pub fn name(&self) -> &'static str {
        match self {
            ParameterMode::Permissive => "permissive",
            ParameterMode::Strict => "strict",
        }
    }
}

impl std::fmt::Display for ParameterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// PROCESS CONFIG
// =============================================================================

/// Configuration for a [`PoissonProcess`](crate::PoissonProcess).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Input handling mode
    pub mode: ParameterMode,
}

impl ProcessConfig {
    /// Permissive configuration (same as `Default`).
    pub fn permissive() -> Self {
        Self { mode: ParameterMode::Permissive }
    }
    
    /// Strict configuration.
    pub fn strict() -> Self {
        Self { mode: ParameterMode::Strict }
    }
    
    /// Checks an arrival rate against the configured mode.
    pub fn check_rate(&self, rate: f64) -> Result<()> {
        self.check_non_negative("rate", rate)
    }
    
    /// Checks an interval duration against the configured mode.
    pub fn check_duration(&self, duration: f64) -> Result<()> {
        self.check_non_negative("duration", duration)
    }
    
    fn check_non_negative(&self, name: &'static str, value: f64) -> Result<()> {
        if self.mode == ParameterMode::Permissive {
            return Ok(());
        }
        if !value.is_finite() {
            return Err(PoissonError::invalid(name, value, "must be finite"));
        }
        if value < 0.0 {
            return Err(PoissonError::invalid(name, value, "must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_permissive_accepts_everything() {
        let config = ProcessConfig::permissive();
        for value in [-1.0, 0.0, 3.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(config.check_rate(value).is_ok());
            assert!(config.check_duration(value).is_ok());
        }
    }
    
    #[test]
    fn test_strict_rejects_negative_and_non_finite() {
        let config = ProcessConfig::strict();
        
        assert!(config.check_rate(0.0).is_ok());
        assert!(config.check_duration(12.0).is_ok());
        
        match config.check_rate(-0.5) {
            Err(PoissonError::InvalidParameter { name, value, .. }) => {
                assert_eq!(name, "rate");
                assert_eq!(value, -0.5);
            }
            other => panic!("expected InvalidParameter, got {:?}", other),
        }
        
        assert!(config.check_duration(f64::NAN).is_err());
        assert!(config.check_duration(f64::INFINITY).is_err());
    }
    
    #[test]
    fn test_mode_display() {
        assert_eq!(ParameterMode::Strict.to_string(), "strict");
        assert_eq!(ParameterMode::default().to_string(), "permissive");
    }
}
