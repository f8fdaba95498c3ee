//! Variate samplers for inter-arrival times and arrival counts.
//!
//! Each sampler owns its own [`SeededStream`], so the exponential and the
//! Poisson-count families never share generator state or `last_seed`.

use crate::error::{PoissonError, Result};
use crate::stream::{SeededStream, StreamFamily};
use poisson_env::EntropySource;
use rand_distr::{Distribution, Exp1, Poisson};
use tracing::warn;

/// `2^64`, the first float that no longer fits in a `u64` count.
const COUNT_LIMIT: f64 = 18_446_744_073_709_551_616.0;

/// Draws exponential inter-arrival times.
///
/// Density: `f(x) = rate * exp(-rate * x)` for `x >= 0`.
#[derive(Debug, Clone)]
pub struct ExponentialSampler {
    stream: SeededStream,
}

impl ExponentialSampler {
    /// Creates a sampler with a fresh exponential-family stream.
    pub fn new() -> Self {
        Self {
            stream: SeededStream::new(StreamFamily::Exponential),
        }
    }

    /// Returns the underlying stream.
    pub fn stream(&self) -> &SeededStream {
        &self.stream
    }

    /// Draws one exponential variate with the given rate.
    ///
    /// A standard exponential variate is scaled by `1 / rate`. Any rate is
    /// accepted: `0` gives `+inf`, a negative rate gives a negative value.
    pub fn sample<E>(&mut self, rate: f64, seed: u64, entropy: &E) -> Result<f64>
    where
        E: EntropySource + ?Sized,
    {
        let rng = self.stream.draw(seed, entropy)?;
        let standard: f64 = Exp1.sample(rng);
        Ok(standard / rate)
    }
}

impl Default for ExponentialSampler {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws Poisson-distributed arrival counts.
///
/// PMF: `f(x) = exp(-m) * m^x / x!` with mean `m`.
#[derive(Debug, Clone)]
pub struct PoissonCountSampler {
    stream: SeededStream,
}

impl PoissonCountSampler {
    /// Creates a sampler with a fresh Poisson-family stream.
    pub fn new() -> Self {
        Self {
            stream: SeededStream::new(StreamFamily::PoissonCount),
        }
    }

    /// Returns the underlying stream.
    pub fn stream(&self) -> &SeededStream {
        &self.stream
    }

    /// Draws one Poisson variate with the given mean.
    ///
    /// # Returns
    /// * `Ok(0)` - `mean` is zero (point mass), negative or NaN
    /// * `Ok(n)` - a Poisson(`mean`) variate
    /// * `Err(PoissonError::UnboundedMean)` - `mean` is infinite
    /// * `Err(PoissonError::CountOverflow)` - the variate is `2^64` or more
    pub fn sample<E>(&mut self, mean: f64, seed: u64, entropy: &E) -> Result<u64>
    where
        E: EntropySource + ?Sized,
    {
        let rng = self.stream.draw(seed, entropy)?;

        if mean == 0.0 {
            return Ok(0);
        }
        if mean.is_nan() || mean < 0.0 {
            warn!(mean, "poisson mean outside its domain, returning 0");
            return Ok(0);
        }
        if mean.is_infinite() {
            return Err(PoissonError::UnboundedMean(mean));
        }

        let distribution = Poisson::new(mean).map_err(PoissonError::distribution)?;
        let variate: f64 = distribution.sample(rng);
        if variate >= COUNT_LIMIT {
            return Err(PoissonError::CountOverflow { mean, variate });
        }
        Ok(variate as u64)
    }
}

impl Default for PoissonCountSampler {
    fn default() -> Self {
        Self::new()
    }
}
