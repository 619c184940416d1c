//! Deterministic random number generation for shuffling.
//!
//! - **Deterministic**: the same seed produces the same shuffle, so a
//!   recorded game can be replayed exactly.
//! - **Serializable**: O(1) state capture and restore via the ChaCha8
//!   word position.
//!
//! Fixed-ordering test setups bypass the RNG entirely (see
//! [`crate::core::deck`]); this type only exists for the shuffled path.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seedable, deterministic RNG backing deck shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG with an entropy-derived seed.
    ///
    /// The seed is still recorded, so the game remains replayable.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}
