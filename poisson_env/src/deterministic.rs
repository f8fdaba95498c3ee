//! Deterministic entropy sources for reproducible seed-0 runs.

use crate::error::EnvError;
use crate::EntropySource;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Entropy derived from a single master seed.
///
/// Every call to `next_seed` advances a seeded ChaCha8 generator, so two
/// sources built from the same master seed hand out the same seeds.
#[derive(Debug)]
pub struct DeterministicEntropy {
    /// Master seed for this source
    master_seed: u64,
    
    /// Generator producing the seed sequence
    rng: Mutex<ChaCha8Rng>,
}

impl DeterministicEntropy {
    /// Creates a new source with the given master seed.
    pub fn new(master_seed: u64) -> Self {
        Self {
            master_seed,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(master_seed)),
        }
    }
    
    /// Returns the master seed (for logging/debugging).
    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }
}

impl EntropySource for DeterministicEntropy {
    fn next_seed(&self) -> Result<u64, EnvError> {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        loop {
            let seed = rng.next_u64();
            if seed != 0 {
                return Ok(seed);
            }
        }
    }
    
    fn label(&self) -> &'static str {
        "deterministic"
    }
}

/// Entropy that replays a fixed list of seeds, then fails.
///
/// Useful when a test needs to know exactly which seed a seed-0 call
/// resolved to. Zero entries are skipped.
#[derive(Debug)]
pub struct ScriptedEntropy {
    seeds: Mutex<VecDeque<u64>>,
    
    /// Number of seeds handed out so far
    served: Mutex<usize>,
}

impl ScriptedEntropy {
    /// Creates a source replaying `seeds` in order.
    pub fn new(seeds: impl IntoIterator<Item = u64>) -> Self {
        Self {
            seeds: Mutex::new(seeds.into_iter().filter(|&s| s != 0).collect()),
            served: Mutex::new(0),
        }
    }
    
    /// Returns the number of seeds not yet handed out.
    pub fn remaining(&self) -> usize {
        self.seeds.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }
}

impl EntropySource for ScriptedEntropy {
    fn next_seed(&self) -> Result<u64, EnvError> {
        let mut seeds = self.seeds.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut served = self.served.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        match seeds.pop_front() {
            Some(seed) => {
                *served += 1;
                Ok(seed)
            }
            None => Err(EnvError::Exhausted(*served)),
        }
    }
    
    fn label(&self) -> &'static str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[test]
    fn test_deterministic_entropy_reproducible() {
        let a = DeterministicEntropy::new(42);
        let b = DeterministicEntropy::new(42);
        
        for _ in 0..8 {
            assert_eq!(a.next_seed().unwrap(), b.next_seed().unwrap());
        }
    }
    
    #[test]
    fn test_deterministic_entropy_distinct_masters() {
        let a = DeterministicEntropy::new(1);
        let b = DeterministicEntropy::new(2);
        
        assert_ne!(a.next_seed().unwrap(), b.next_seed().unwrap());
        assert_eq!(a.master_seed(), 1);
    }
    
    #[test]
    fn test_scripted_entropy_order_and_exhaustion() {
        let entropy = ScriptedEntropy::new([5, 0, 9]);
        assert_eq!(entropy.remaining(), 2);
        
        assert_eq!(entropy.next_seed().unwrap(), 5);
        assert_eq!(entropy.next_seed().unwrap(), 9);
        
        match entropy.next_seed() {
            Err(EnvError::Exhausted(served)) => assert_eq!(served, 2),
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }
    
    #[test]
    fn test_labels() {
        assert_eq!(DeterministicEntropy::new(0).label(), "deterministic");
        assert_eq!(ScriptedEntropy::new([]).label(), "scripted");
    }
}
