//! Poisson Process Core - Probabilities and Reproducible Sampling
//!
//! This library answers two kinds of questions about a Poisson process
//! with arrival rate `L`:
//! 1. **Probabilities**: `P(N(t+s) - N(t) = k)` and `P(N(t+s) - N(t) <= k)`
//! 2. **Sampling**: arrival-time sequences and arrival counts drawn from
//!    seeded streams that persist across calls
//!
//! Seeded streams follow a continue-on-repeat policy: the same nonzero seed
//! keeps drawing from one sequence, a different seed restarts it, and seed
//! `0` pulls a fresh seed from an [`poisson_env::EntropySource`].

pub mod error;
pub mod math;
pub mod process;
pub mod sampler;
pub mod shared;
pub mod stream;
pub mod validation;

// Re-export key types for convenience
pub use error::{PoissonError, Result};
pub use process::{ArrivalTimes, PoissonProcess};
pub use sampler::{ExponentialSampler, PoissonCountSampler};
pub use shared::SharedPoissonProcess;
pub use stream::{SeededStream, StreamFamily};
pub use validation::{ParameterMode, ProcessConfig};
