//! Random number generation for a run
//!
//! Uses a seeded ChaCha RNG so a seed replays a run exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Run random number generator
///
/// Every random decision in a run draws from this single stream: the day
/// schedule first, then the rolls inside each event in the order they happen.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a player-entered seed.
    ///
    /// Negative seeds are accepted; the bits are reused as the ChaCha seed.
    pub fn from_player_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Pick `amount` distinct elements in random order.
    ///
    /// Partial Fisher-Yates from the front: slot `i` is swapped with a
    /// uniformly chosen slot in `i..len`, one draw per picked element.
    /// `amount` is capped at `items.len()`.
    pub fn sample<T: Clone>(&mut self, items: &[T], amount: usize) -> Vec<T> {
        let mut pool = items.to_vec();
        let amount = amount.min(pool.len());
        for i in 0..amount {
            let j = i + self.rn2((pool.len() - i) as u32) as usize;
            pool.swap(i, j);
        }
        pool.truncate(amount);
        pool
    }
}
