//! RNG oracle for deterministic random number generation.
//!
//! Randomness in this core is seed-addressed: the oracle is a pure function
//! of the seed it is handed, and seeds are derived from the game seed plus
//! the decision nonce. Given the same initial state, a game therefore
//! replays identically.

use crate::state::EntityId;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be pure: the same seed always produces the same
/// value.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform index into a collection of `len` elements.
    ///
    /// Returns 0 when `len` is 0. Uses modulo reduction; the bias is
    /// negligible for the small ranges this core draws from.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.next_u32(seed) as usize % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: a single LCG step followed by an xorshift and a random
/// rotation. Small state, good statistical quality, and stateless to use
/// here since the seed is supplied per draw.
///
/// Reference: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the LCG state by one step.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift the high bits, then rotate by
    /// the top bits of the state.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derives a decision-unique seed from the game seed, the decision nonce,
/// and the acting entity.
///
/// The mixing constants come from SplitMix64; the final avalanche spreads
/// low-entropy inputs (small nonces, small ids) across the whole word.
pub fn compute_seed(game_seed: u64, nonce: u64, actor: EntityId) -> u64 {
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor.0 as u64).wrapping_mul(0x517cc1b727220a95);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
