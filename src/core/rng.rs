//! Seeded randomness for automatic setups.
//!
//! The registry holds one `GameRng` and forks a child stream for every
//! automatic arrangement, so two registries built from the same seed hand out
//! identical arrangements in the same order.
//!
//! ```
//! use stratego_engine::core::GameRng;
//!
//! let cells = [1, 2, 3, 4, 5, 6];
//! let a = GameRng::new(7).sample(&cells, 3);
//! let b = GameRng::new(7).sample(&cells, 3);
//! assert_eq!(a, b);
//! ```

use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that remembers the seed it started from.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent stream seeded from this one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// Pick `amount` distinct items, in random order.
    ///
    /// Returns every item (shuffled) if `amount` exceeds the slice length.
    pub fn sample<T: Copy>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let amount = amount.min(items.len());
        index::sample(&mut self.inner, items.len(), amount)
            .into_iter()
            .map(|i| items[i])
            .collect()
    }
}
