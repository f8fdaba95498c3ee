//! The Poisson process facade.
//!
//! [`PoissonProcess`] bundles the stateless probability functions with the
//! two persistent sampling streams and the input-validation mode. It is an
//! ordinary owned value: create one per independent experiment, pass it by
//! `&mut` to sample, and nothing leaks between instances.

use crate::error::Result;
use crate::math;
use crate::sampler::{ExponentialSampler, PoissonCountSampler};
use crate::stream::SeededStream;
use crate::validation::ProcessConfig;
use poisson_env::{EntropySource, OsEntropy};
use tracing::debug;

/// Upper bound on the up-front allocation of [`PoissonProcess::sample_arrival_times`].
const MAX_RESERVED_ARRIVALS: u64 = 1 << 16;

/// Poisson process evaluation and sampling.
///
/// # Seeds
///
/// A nonzero seed gives a reproducible stream. Passing the same nonzero seed
/// again *continues* the stream; passing a different one restarts it. Seed
/// `0` draws a fresh seed from the entropy source `E`.
///
/// # Example
///
/// ```
/// use poisson_core::{PoissonProcess, ProcessConfig};
/// use poisson_env::ScriptedEntropy;
///
/// let mut process = PoissonProcess::with_entropy(ProcessConfig::default(), ScriptedEntropy::new([]));
///
/// let p = process.pmf(2.0, 1.0, 0).unwrap();
/// assert_eq!(p, (-2.0f64).exp());
///
/// let times = process.sample_arrival_times(1.5, 4, 42).unwrap();
/// assert_eq!(times.len(), 4);
/// assert!(times.windows(2).all(|w| w[0] < w[1]));
/// ```
#[derive(Debug)]
pub struct PoissonProcess<E = OsEntropy> {
    config: ProcessConfig,
    entropy: E,
    exponential: ExponentialSampler,
    count: PoissonCountSampler,
}

impl PoissonProcess<OsEntropy> {
    /// Creates a process drawing seed-0 entropy from the operating system.
    pub fn new(config: ProcessConfig) -> Self {
        Self::with_entropy(config, OsEntropy::new())
    }
}

impl<E: EntropySource> PoissonProcess<E> {
    /// Creates a process with an injected entropy source.
    pub fn with_entropy(config: ProcessConfig, entropy: E) -> Self {
        Self {
            config,
            entropy,
            exponential: ExponentialSampler::new(),
            count: PoissonCountSampler::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ProcessConfig {
        &self.config
    }

    /// Returns the entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Returns the inter-arrival time stream.
    pub fn exponential_stream(&self) -> &SeededStream {
        self.exponential.stream()
    }

    /// Returns the arrival count stream.
    pub fn count_stream(&self) -> &SeededStream {
        self.count.stream()
    }

    /// `P(N(t+s) - N(t) = k)` for rate `rate` and interval length `duration`.
    pub fn pmf(&self, rate: f64, duration: f64, k: u64) -> Result<f64> {
        self.check_interval(rate, duration)?;
        Ok(math::pmf(rate, duration, k))
    }

    /// `P(N(t+s) - N(t) <= k)` for rate `rate` and interval length `duration`.
    pub fn cdf(&self, rate: f64, duration: f64, k: u64) -> Result<f64> {
        self.check_interval(rate, duration)?;
        Ok(math::cdf(rate, duration, k))
    }

    /// Samples the first `n` arrival times of a Poisson process.
    ///
    /// Collects [`arrival_times`](Self::arrival_times). Prefer the iterator
    /// when `n` is large enough that the whole sequence should not be held
    /// in memory.
    ///
    /// # Returns
    /// `t_0 = X_0`, `t_i = t_{i-1} + X_i`; strictly increasing for `rate > 0`.
    pub fn sample_arrival_times(&mut self, rate: f64, n: u64, seed: u64) -> Result<Vec<f64>> {
        let mut arrival_times = Vec::with_capacity(n.min(MAX_RESERVED_ARRIVALS) as usize);
        for arrival in self.arrival_times(rate, n, seed)? {
            arrival_times.push(arrival?);
        }
        Ok(arrival_times)
    }

    /// Lazily samples the first `n` arrival times of a Poisson process.
    ///
    /// Each gap is an exponential draw made with the same seed, so the
    /// stream continues across draws. A seed of `0` is resolved to one fresh
    /// seed up front and that seed is used for every draw. Nothing is drawn
    /// until the iterator is advanced.
    pub fn arrival_times(&mut self, rate: f64, n: u64, seed: u64) -> Result<ArrivalTimes<'_, E>> {
        self.config.check_rate(rate)?;
        let active_seed = self.resolve_seed(seed)?;
        debug!(rate, n, seed, active_seed, "sampling arrival times");

        Ok(ArrivalTimes {
            sampler: &mut self.exponential,
            entropy: &self.entropy,
            rate,
            seed: active_seed,
            remaining: n,
            latest_arrival: 0.0,
        })
    }

    /// Samples the number of arrivals in an interval of length `duration`.
    pub fn sample_number_arrivals(&mut self, rate: f64, duration: f64, seed: u64) -> Result<u64> {
        self.check_interval(rate, duration)?;
        let active_seed = self.resolve_seed(seed)?;
        debug!(rate, duration, seed, active_seed, "sampling number of arrivals");

        let mean = math::interval_mean(rate, duration);
        self.count.sample(mean, active_seed, &self.entropy)
    }

    fn check_interval(&self, rate: f64, duration: f64) -> Result<()> {
        self.config.check_rate(rate)?;
        self.config.check_duration(duration)
    }

    fn resolve_seed(&self, seed: u64) -> Result<u64> {
        if seed == 0 {
            Ok(self.entropy.next_seed()?)
        } else {
            Ok(seed)
        }
    }
}

/// Iterator over sampled arrival times, see [`PoissonProcess::arrival_times`].
///
/// Stops after the first error.
pub struct ArrivalTimes<'a, E> {
    sampler: &'a mut ExponentialSampler,
    entropy: &'a E,
    rate: f64,
    seed: u64,
    remaining: u64,
    latest_arrival: f64,
}

impl<E: EntropySource> Iterator for ArrivalTimes<'_, E> {
    type Item = Result<f64>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        match self.sampler.sample(self.rate, self.seed, self.entropy) {
            Ok(gap) => {
                self.latest_arrival += gap;
                Some(Ok(self.latest_arrival))
            }
            Err(e) => {
                self.remaining = 0;
                Some(Err(e))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(remaining) => (remaining, Some(remaining)),
            Err(_) => (usize::MAX, None),
        }
    }
}
