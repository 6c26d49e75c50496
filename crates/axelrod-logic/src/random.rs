//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible tournaments. Strategies never touch a
//! global random source: everything that needs a coin flip receives an
//! [`Entropy`] from the round engine.

/// Source of randomness for strategies that need it.
pub trait Entropy {
    /// Fair coin flip
    fn coin_flip(&mut self) -> bool;
}

/// Seeded random number generator
///
/// Deterministic: same seed + stream index = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a tournament seed and a stream index
    /// (the pairing index when used by the tournament runner)
    pub fn new(seed: u64, stream: u32) -> Self {
        let mut state = seed ^ 0x6a09e667f3bcc908;
        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);
        // xorshift has a fixed point at zero
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        // Warm up the generator
        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create RNG for one side of a specific round within a game
    pub fn for_round(&self, round: u32) -> Self {
        let mut new_state = self.state;
        new_state ^= (round as u64 + 1).wrapping_mul(0x9e3779b97f4a7c15);
        if new_state == 0 {
            new_state = self.state | 1;
        }

        let mut rng = Self { state: new_state };
        rng.next_u64(); // Mix
        rng
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }
}

impl Entropy for SeededRng {
    fn coin_flip(&mut self) -> bool {
        // top bit; the low bits of xorshift* are the weakest
        self.next_u64() >> 63 == 1
    }
}
