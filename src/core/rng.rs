//! Deterministic random number generation for sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical colors and placements
//! - **Forkable**: Each session gets its own branch of the game seed
//! - **Context streams**: Colors and placements draw from independent sequences
//! - **Serializable**: State capture for snapshots
//!
//! ```
//! use scramble_recall::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let session = rng.fork();
//!
//! let mut colors = session.for_context("color");
//! let mut placement = session.for_context("placement");
//! assert_ne!(colors.seed(), placement.seed());
//!
//! let x = placement.gen_up_to(100);
//! assert!(x <= 100);
//! let _ = colors.gen_byte();
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Deterministic RNG backed by ChaCha8.
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

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// The game forks once per session so restarts never replay a layout.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The stream depends only on the seed and the context name, never on
    /// how far this RNG has advanced. FxHash keeps it stable across toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        let context_seed = hasher.finish();

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Uniform integer in `0..=max`.
    pub fn gen_up_to(&mut self, max: u32) -> u32 {
        self.inner.gen_range(0..=max)
    }

    /// Uniform byte, used for color channels.
    pub fn gen_byte(&mut self) -> u8 {
        self.inner.gen()
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

/// Serializable RNG state for snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_up_to(1000), rng2.gen_up_to(1000));
        }
    }

    #[test]
    fn test_gen_up_to_is_inclusive_and_bounded() {
        let mut rng = GameRng::new(7);
        let mut saw_max = false;
        for _ in 0..500 {
            let v = rng.gen_up_to(3);
            assert!(v <= 3);
            saw_max |= v == 3;
        }
        assert!(saw_max);

        assert_eq!(rng.gen_up_to(0), 0);
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.gen_up_to(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.gen_up_to(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_successive_forks_differ() {
        let mut rng = GameRng::new(42);
        let first = rng.fork();
        let second = rng.fork();

        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_context_is_deterministic() {
        let rng1 = GameRng::new(42);
        let rng2 = GameRng::new(42);

        let mut ctx1 = rng1.for_context("placement");
        let mut ctx2 = rng2.for_context("placement");

        for _ in 0..10 {
            assert_eq!(ctx1.gen_up_to(1000), ctx2.gen_up_to(1000));
        }
    }

    #[test]
    fn test_context_ignores_stream_position() {
        let fresh = GameRng::new(42);
        let mut advanced = GameRng::new(42);
        for _ in 0..50 {
            advanced.gen_up_to(1000);
        }

        let mut a = fresh.for_context("color");
        let mut b = advanced.for_context("color");
        assert_eq!(a.seed(), b.seed());
        assert_eq!(a.gen_byte(), b.gen_byte());
        assert_ne!(fresh.for_context("color").seed(), fresh.for_context("placement").seed());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.gen_up_to(1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.gen_up_to(1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_up_to(1000)).collect();

        assert_eq!(expected, actual);
    }
}
