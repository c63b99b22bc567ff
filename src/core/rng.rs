//! Deterministic random number generation for shuffling.
//!
//! The engine only needs randomness while a `Shop` is being built: the deck
//! shuffle, the price-token shuffle, and the stack choices for the initial
//! tile queue. All of it runs off one seeded generator owned by the
//! construction path, so the same seed always produces the same shop and no
//! code ever touches process-wide random state.
//!
//! ```
//! use ankhor::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut tiles = vec![1, 2, 3, 4, 5];
//! rng.shuffle(&mut tiles);
//!
//! // Same seed, same shuffle
//! let mut rng2 = GameRng::new(42);
//! let mut tiles2 = vec![1, 2, 3, 4, 5];
//! rng2.shuffle(&mut tiles2);
//! assert_eq!(tiles, tiles2);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic, forkable RNG.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
/// Forking yields an independent but reproducible branch, so cloned
/// sessions and parallel test runs never share a stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence: forking
    /// the same parent state twice in two runs yields the same child.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a uniform index in `0..len`.
    ///
    /// Used for the stack choices when dealing the initial tile queue.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
