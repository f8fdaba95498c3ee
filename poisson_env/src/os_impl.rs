//! Production implementation of EntropySource using the OS generator.

use crate::error::EnvError;
use crate::EntropySource;
use rand::rngs::OsRng;
use rand::RngCore;

/// Production entropy backed by the operating system.
///
/// This is the "real" implementation used by the command-line tool:
/// every call reads 8 fresh bytes from `OsRng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl OsEntropy {
    /// Creates a new OsEntropy.
    pub fn new() -> Self {
        Self
    }
}

impl EntropySource for OsEntropy {
    fn next_seed(&self) -> Result<u64, EnvError> {
        let mut bytes = [0u8; 8];
        loop {
            OsRng.try_fill_bytes(&mut bytes).map_err(EnvError::unavailable)?;
            let seed = u64::from_le_bytes(bytes);
            if seed != 0 {
                return Ok(seed);
            }
        }
    }
    
    fn label(&self) -> &'static str {
        "os"
    }
}
