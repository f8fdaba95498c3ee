//! Poisson Process Entropy Abstraction Layer
//!
//! This crate isolates the one source of non-determinism in the toolkit:
//! the fresh seed drawn when a caller passes seed `0`.
//!
//! # Core Concept
//!
//! Sampling code never touches the operating system directly. It asks an
//! [`EntropySource`] for a seed:
//! - **Production**: [`OsEntropy`] - wraps `OsRng`
//! - **Testing**: [`DeterministicEntropy`] / [`ScriptedEntropy`] - reproducible seeds
//!
//! By routing every "random" seed through this trait, a seed-0 run becomes
//! reproducible in tests simply by swapping the implementation.
//!
//! # Example
//!
//! ```
//! use poisson_env::{EntropySource, ScriptedEntropy};
//!
//! let entropy = ScriptedEntropy::new([17, 23]);
//! assert_eq!(entropy.next_seed().unwrap(), 17);
//! assert_eq!(entropy.next_seed().unwrap(), 23);
//! assert!(entropy.next_seed().is_err());
//! ```

mod context;
mod deterministic;
mod error;
mod os_impl;

pub use context::EntropySource;
pub use deterministic::{DeterministicEntropy, ScriptedEntropy};
pub use error::EnvError;
pub use os_impl::OsEntropy;
