//! Seeded random streams, one per distribution family.
//!
//! A stream keeps its generator alive between calls. The reseed policy is
//! keyed on the *change* of the seed value, not on its presence:
//!
//! | requested seed | state                      | action                        |
//! |----------------|----------------------------|-------------------------------|
//! | `0`            | any                        | reseed from the entropy source |
//! | `s != 0`       | no generator yet           | seed with `s`                 |
//! | `s != 0`       | `last_seed == s`           | continue the current sequence |
//! | `s != 0`       | `last_seed != s`           | reseed with `s`               |
//!
//! Repeating the same nonzero seed therefore *continues* a sequence rather
//! than restarting it. Callers that loop with a constant seed (arrival
//! times) rely on this to get independent draws.

use crate::error::Result;
use poisson_env::EntropySource;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Generator type backing every stream.
pub type StreamRng = ChaCha8Rng;

/// Distribution family owning a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StreamFamily {
    /// Inter-arrival times
    Exponential,

    /// Arrival counts
    PoissonCount,
}

impl StreamFamily {
    /// Returns the family name.
    pub fn name(&self) -> &'static str {
        match self {
            StreamFamily::Exponential => "exponential",
            StreamFamily::PoissonCount => "poisson_count",
        }
    }
}

impl std::fmt::Display for StreamFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A persistent generator plus the seed it was last (re)seeded with.
#[derive(Debug, Clone)]
pub struct SeededStream {
    family: StreamFamily,

    /// `(last_seed, generator)`, created lazily on the first draw
    state: Option<(u64, StreamRng)>,

    /// Number of times the generator has been (re)seeded
    reseeds: u64,
}

impl SeededStream {
    /// Creates a stream with no generator yet.
    pub fn new(family: StreamFamily) -> Self {
        Self {
            family,
            state: None,
            reseeds: 0,
        }
    }

    /// Returns the family this stream serves.
    pub fn family(&self) -> StreamFamily {
        self.family
    }

    /// Returns the seed the generator was last seeded with.
    ///
    /// For a seed-0 request this is the seed drawn from the entropy source.
    pub fn last_seed(&self) -> Option<u64> {
        self.state.as_ref().map(|(seed, _)| *seed)
    }

    /// Returns how many times the generator has been (re)seeded.
    pub fn reseed_count(&self) -> u64 {
        self.reseeds
    }

    /// Returns the generator to draw from, applying the reseed policy.
    ///
    /// # Arguments
    /// * `seed` - Requested seed; `0` asks for a fresh one from `entropy`
    /// * `entropy` - Source of fresh seeds
    pub fn draw<E>(&mut self, seed: u64, entropy: &E) -> Result<&mut StreamRng>
    where
        E: EntropySource + ?Sized,
    {
        let active_seed = match (seed, self.last_seed()) {
            (0, _) => Some(entropy.next_seed()?),
            (requested, Some(last)) if requested == last => None,
            (requested, _) => Some(requested),
        };

        let (_, rng) = match active_seed {
            Some(active_seed) => {
                debug!(
                    family = %self.family,
                    seed,
                    active_seed,
                    entropy = entropy.label(),
                    "reseeding stream"
                );
                self.reseeds += 1;
                self.state.insert((active_seed, StreamRng::seed_from_u64(active_seed)))
            }
            None => self
                .state
                .get_or_insert_with(|| (seed, StreamRng::seed_from_u64(seed))),
        };

        Ok(rng)
    }
}
