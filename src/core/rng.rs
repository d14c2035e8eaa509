//! Deterministic random number generation for order creation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical orders
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use fraction_kitchen::core::KitchenRng;
//!
//! let mut rng = KitchenRng::new(42);
//! let denominator = rng.gen_range_inclusive(2..=10);
//! assert!((2..=10).contains(&denominator));
//!
//! // Same seed, same sequence
//! let mut again = KitchenRng::new(42);
//! assert_eq!(again.gen_range_inclusive(2..=10), denominator);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Seeded RNG owned by a game session.
///
/// Uses ChaCha8 so a seed reproduces the exact same sequence of orders on
/// every platform.
#[derive(Clone, Debug)]
pub struct KitchenRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl KitchenRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<u64>) -> u64 {
        self.inner.gen_range(range)
    }

    /// Generate a random index in `0..len`.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Choose `amount` distinct elements from a slice, in random order.
    ///
    /// Returns fewer than `amount` elements when the slice is shorter.
    pub fn choose_distinct<'a, T>(&mut self, slice: &'a [T], amount: usize) -> Vec<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose_multiple(&mut self.inner, amount).collect()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> KitchenRngState {
        KitchenRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &KitchenRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position so capture and restore are O(1)
/// regardless of how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitchenRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
