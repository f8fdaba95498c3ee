//! Mutex-guarded facade for concurrent callers.

use crate::error::Result;
use crate::process::PoissonProcess;
use poisson_env::{EntropySource, OsEntropy};
use std::sync::{Arc, Mutex, MutexGuard};

/// A [`PoissonProcess`] shared between threads.
///
/// Every operation takes the same lock, so a reseed and the draws that
/// follow it are never interleaved with another caller's. Clones share the
/// underlying streams.
pub struct SharedPoissonProcess<E = OsEntropy> {
    inner: Arc<Mutex<PoissonProcess<E>>>,
}

impl<E: EntropySource> SharedPoissonProcess<E> {
    /// Wraps an existing process.
    pub fn from_process(process: PoissonProcess<E>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(process)),
        }
    }

    /// Locks the process for a sequence of operations.
    ///
    /// A poisoned lock is recovered: every operation leaves the streams in
    /// a consistent state before it can panic.
    pub fn lock(&self) -> MutexGuard<'_, PoissonProcess<E>> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// See [`PoissonProcess::pmf`].
    pub fn pmf(&self, rate: f64, duration: f64, k: u64) -> Result<f64> {
        self.lock().pmf(rate, duration, k)
    }

    /// See [`PoissonProcess::cdf`].
    pub fn cdf(&self, rate: f64, duration: f64, k: u64) -> Result<f64> {
        self.lock().cdf(rate, duration, k)
    }

    /// See [`PoissonProcess::sample_arrival_times`].
    pub fn sample_arrival_times(&self, rate: f64, n: u64, seed: u64) -> Result<Vec<f64>> {
        self.lock().sample_arrival_times(rate, n, seed)
    }

    /// See [`PoissonProcess::sample_number_arrivals`].
    pub fn sample_number_arrivals(&self, rate: f64, duration: f64, seed: u64) -> Result<u64> {
        self.lock().sample_number_arrivals(rate, duration, seed)
    }
}

impl<E> Clone for SharedPoissonProcess<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
