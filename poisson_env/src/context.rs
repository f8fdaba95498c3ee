//! Core entropy trait for seed-0 handling.

use crate::error::EnvError;

/// The central interface for obtaining non-reproducible seeds.
///
/// A seed of `0` is reserved by the sampling layer to mean "pick a fresh
/// seed for me". Whatever picks that seed implements this trait.
///
/// # Implementations
///
/// - **Production**: `OsEntropy` - wraps `OsRng`
/// - **Testing**: `DeterministicEntropy` - `ChaCha8Rng(master_seed)`
/// - **Testing**: `ScriptedEntropy` - a fixed queue of seeds
///
/// # Contract
///
/// `next_seed` never returns `0`, since `0` would be read back as another
/// request for entropy.
pub trait EntropySource: Send + Sync + 'static {
    /// Returns a fresh nonzero seed.
    fn next_seed(&self) -> Result<u64, EnvError>;
    
    /// Short name of the source, used in log output.
    fn label(&self) -> &'static str;
}
