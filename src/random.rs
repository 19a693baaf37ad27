//! Injectable randomness for shuffles and opponent choices.
//!
//! All nondeterminism in a match flows through [`RandomSource`], so a fixed
//! seed (or a scripted source in tests) replays a match exactly.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A source of random permutations and uniform choices.
pub trait RandomSource {
    /// Reorders `cards` into a uniformly random permutation.
    fn shuffle(&mut self, cards: &mut [Card]);

    /// Picks an index in `0..len` uniformly at random.
    ///
    /// Returns `None` when `len` is zero.
    fn choose(&mut self, len: usize) -> Option<usize>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn shuffle(&mut self, cards: &mut [Card]) {
        (**self).shuffle(cards);
    }

    fn choose(&mut self, len: usize) -> Option<usize> {
        (**self).choose(len)
    }
}

/// Seeded ChaCha8 randomness. The same seed always yields the same match.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SeededRandom {
    /// Creates a source from the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed this source was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn shuffle(&mut self, cards: &mut [Card]) {
        cards.shuffle(&mut self.inner);
    }

    fn choose(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.inner.random_range(0..len))
    }
}
