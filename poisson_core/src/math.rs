//! Poisson process probabilities.
//!
//! For a Poisson process `N` with arrival rate `L`, the number of arrivals
//! in an interval of length `s` is Poisson distributed with mean `L * s`:
//!
//! ```text
//! P(N(t+s) - N(t) = k) = exp(-L*s) * (L*s)^k / k!
//! ```
//!
//! Both `(L*s)^k` and `k!` overflow long before their ratio does, so the
//! ratio is built as a running product of `mean / i`. No input is checked
//! here; see [`crate::validation`] for the strict mode.

use tracing::debug;

/// Mean number of arrivals over an interval.
#[inline]
pub fn interval_mean(rate: f64, duration: f64) -> f64 {
    rate * duration
}

/// Probability of exactly `k` arrivals in an interval of length `duration`.
///
/// # Arguments
/// * `rate` - Arrivals per unit time
/// * `duration` - Interval length
/// * `k` - Number of arrivals
pub fn pmf(rate: f64, duration: f64, k: u64) -> f64 {
    debug!(rate, duration, k, "evaluating pmf");

    let mean = interval_mean(rate, duration);
    let mut running_product = 1.0;
    for i in 1..=k {
        running_product *= mean / i as f64;
    }

    (-mean).exp() * running_product
}

/// Probability of at most `k` arrivals in an interval of length `duration`.
///
/// Sums `pmf(rate, duration, i)` for `i = 0..=k` left to right. The running
/// product is advanced once per term instead of being rebuilt; it goes
/// through the same multiplications in the same order as [`pmf`], so each
/// term is bit-identical to the corresponding `pmf` call.
pub fn cdf(rate: f64, duration: f64, k: u64) -> f64 {
    debug!(rate, duration, k, "evaluating cdf");

    let mean = interval_mean(rate, duration);
    let exponential_factor = (-mean).exp();

    let mut running_product = 1.0;
    let mut probability = exponential_factor * running_product;
    for i in 1..=k {
        running_product *= mean / i as f64;
        probability += exponential_factor * running_product;
    }

    probability
}
