//! RNG module - seeded randomness for dealing and refilling
//!
//! Wraps a ChaCha8 stream so a game is fully reproducible from its seed.
//! Shuffles are Fisher-Yates (via `SliceRandom`), indices are uniform.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for one game session
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `[0, len)`
    ///
    /// `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Shuffle a slice in place (Fisher-Yates)
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Derive the seed for the next episode.
    ///
    /// Restarting reseeds from the live stream so consecutive games differ
    /// while the whole run stays reproducible from the first seed.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.index(1000), rng2.index(1000));
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = GameRng::new(12345);
        let mut rng2 = GameRng::new(54321);

        let a: Vec<usize> = (0..16).map(|_| rng1.index(1_000_000)).collect();
        let b: Vec<usize> = (0..16).map(|_| rng2.index(1_000_000)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(7);
        let mut values: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_index_in_range() {
        let mut rng = GameRng::new(3);
        for len in 1..12 {
            for _ in 0..50 {
                assert!(rng.index(len) < len);
            }
        }
    }
}
