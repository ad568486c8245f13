//! Deterministic random number generation for simulations.
//!
//! - `new(seed)`: one stream per seed, identical on every platform
//! - `fork()`: a child stream per combat, keyed by how many forks came before
//! - `derive(seed, i)`: the stream of run `i` in a batch
//! - `state()` / `from_state()`: checkpoint a stream mid-combat and resume it
//!
//! Every function in the crate that needs randomness takes `&mut GameRng`
//! explicitly. Nothing reads an ambient generator or the clock.
//!
//! ```
//! use spire_sim::core::GameRng;
//!
//! let mut run = GameRng::new(42);
//! let mut first_combat = run.fork();
//!
//! let mut replay = GameRng::new(42);
//! let mut replayed_combat = replay.fork();
//! assert_eq!(first_combat.gen_inclusive(1, 100), replayed_combat.gen_inclusive(1, 100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Stream seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Stream for the `index`-th member of a batch seeded with `seed`.
    ///
    /// Depends only on `(seed, index)`, so batch members can run in any
    /// order (or in parallel) and still see the same randomness.
    #[must_use]
    pub fn derive(seed: u64, index: u64) -> Self {
        Self::new(mix(seed ^ index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA)))
    }

    /// Child stream. Successive forks of one parent differ.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(GOLDEN_GAMMA));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a named context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(mix(hasher.finish()))
    }

    /// The seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fresh 64-bit seed for a child simulation.
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }

    /// Generate a random integer in `range`. Returns `range.start` if empty.
    pub fn gen_range(&mut self, range: std::ops::Range<i32>) -> i32 {
        if range.is_empty() {
            return range.start;
        }
        self.inner.gen_range(range)
    }

    /// Generate a random integer in `min..=max`. Returns `min` if `max < min`.
    pub fn gen_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        self.inner.gen_range(min..=max)
    }

    /// Generate a random usize in the given range. Returns `range.start` if empty.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        if range.is_empty() {
            return range.start;
        }
        self.inner.gen_range(range)
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// `true` with probability `probability`, clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Fisher-Yates shuffle in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Uniform pick, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }

    /// Index picked with probability proportional to its weight.
    ///
    /// `None` when there is no positive weight.
    pub fn choose_weighted(&mut self, weights: &[f64]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f64>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold < 0.0 {
                return Some(i);
            }
        }

        // Rounding left a sliver of threshold.
        weights.iter().rposition(|&w| w > 0.0)
    }

    /// Checkpoint of the stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Resume a checkpointed stream exactly where it stopped.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

/// SplitMix64 finalizer.
const fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Saved position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// Position in the ChaCha8 keystream.
    pub word_pos: u128,
    /// Forks taken so far.
    pub fork_counter: u64,
}
