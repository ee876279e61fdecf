//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness of the
//! genetic algorithm. It wraps `ChaCha8Rng` from `rand_chacha`, remembers the seed
//! it was created with and can be reseeded, so that two engines built with the
//! same seed produce bit-identical runs. Unlike `StdRng`, the ChaCha8 stream is
//! fixed across library releases.
//!
//! ## Example
//!
//! ```rust
//! use sga::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(42);
//! let u = rng.uniform01();
//! assert!((0.0..1.0).contains(&u));
//!
//! let idx = rng.index(2, 5);
//! assert!((2..=5).contains(&idx));
//! ```
//!
//! Integer draws are performed on `u64` and converted back, so the stream of
//! values does not depend on the width of `usize`.

use rand::{seq::SliceRandom, Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// A wrapper around a seeded `ChaCha8Rng` that provides the draws the genetic
/// operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` seeded from system entropy.
    ///
    /// The drawn seed is kept and can be read back with [`seed`](Self::seed).
    pub fn new() -> Self {
        Self::from_seed(rand::random())
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Restarts the stream from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
    }

    /// Returns the seed the current stream was started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniform real in `[0, 1)`.
    pub fn uniform01(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// Draws a uniform real in `[from, to)`. Returns `from` when the range is empty.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        from + self.uniform01() * (to - from)
    }

    /// Draws a uniform index in the closed range `[low, high]`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn index(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low as u64..=high as u64) as usize
    }

    /// Draws a uniform integer in the closed range `[low, high]`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn integer(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    /// Draws a sample from the standard normal distribution.
    pub fn standard_normal(&mut self) -> f64 {
        self.rng.sample(StandardNormal)
    }

    /// Draws a full-range `u32`, used to reseed stochastic problems.
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Shuffles `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform01_range() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        for _ in 0..1000 {
            let u = rng.uniform01();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn test_uniform_with_negative_range() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        for _ in 0..100 {
            let u = rng.uniform(-1000.0, 1000.0);
            assert!((-1000.0..1000.0).contains(&u));
        }
        assert_eq!(rng.uniform(3.0, 3.0), 3.0);
    }

    #[test]
    fn test_index_is_inclusive() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let i = rng.index(1, 4);
            assert!((1..=4).contains(&i));
            seen[i - 1] = true;
        }
        assert!(seen.iter().all(|&s| s));
        assert_eq!(rng.index(5, 5), 5);
    }

    #[test]
    fn test_integer_range() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        for _ in 0..100 {
            let i = rng.integer(-2, 2);
            assert!((-2..=2).contains(&i));
        }
    }

    #[test]
    fn test_clone() {
        let mut rng1 = RandomNumberGenerator::from_seed(42);
        let mut rng2 = rng1.clone();

        // Both RNGs should generate the same sequence after cloning
        let nums1: Vec<f64> = (0..5).map(|_| rng1.uniform01()).collect();
        let nums2: Vec<f64> = (0..5).map(|_| rng2.uniform01()).collect();

        assert_eq!(nums1, nums2);
    }

    #[test]
    fn test_reseed_restarts_stream() {
        let mut rng = RandomNumberGenerator::from_seed(11);
        let first: Vec<f64> = (0..5).map(|_| rng.uniform01()).collect();

        rng.reseed(11);
        let again: Vec<f64> = (0..5).map(|_| rng.uniform01()).collect();
        assert_eq!(first, again);
        assert_eq!(rng.seed(), 11);

        rng.reseed(12);
        assert_eq!(rng.seed(), 12);
    }

    #[test]
    fn test_stream_is_pinned() {
        let mut rng = RandomNumberGenerator::from_seed(42);

        assert_eq!(rng.uniform01(), 0.6818961923066714);
        assert_eq!(rng.uniform01(), 0.950275407672484);
        assert_eq!(rng.index(0, 9), 4);
        assert_eq!(rng.integer(-5, 5), -2);
        assert_eq!(rng.next_u32(), 2757591710);

        let mut items: Vec<usize> = (0..6).collect();
        rng.shuffle(&mut items);
        assert_eq!(items, vec![0, 3, 1, 2, 5, 4]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut items: Vec<usize> = (0..10).collect();
        rng.shuffle(&mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..10).collect::<Vec<_>>());
    }
}
