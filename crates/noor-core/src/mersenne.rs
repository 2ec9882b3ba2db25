//! MT19937 pseudorandom generator.
//!
//! Given the same seed the output sequence is always identical, which is what
//! the selection fixtures rely on. Not cryptographically secure.

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;

/// Source of uniformly distributed 32-bit words.
///
/// The selector only needs this, so tests can script exact draws.
pub trait RandomSource: Send {
    fn next_u32(&mut self) -> u32;
}

#[derive(Clone)]
pub struct MersenneTwister {
    state: [u32; N],
    index: usize,
}

impl MersenneTwister {
    pub fn new(seed: u32) -> Self {
        let mut mt = Self {
            state: [0; N],
            index: N,
        };
        mt.seed(seed);
        mt
    }

    /// Seed from the operating system's entropy source, for callers that do
    /// not need a reproducible sequence.
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u32>())
    }

    /// Reset the state from a single 32-bit seed (`init_genrand`).
    pub fn seed(&mut self, seed: u32) {
        self.state[0] = seed;
        for i in 1..N {
            let prev = self.state[i - 1];
            self.state[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.index = N;
    }

    pub fn next_u32(&mut self) -> u32 {
        if self.index >= N {
            self.twist();
        }

        let mut y = self.state[self.index];
        self.index += 1;

        // Tempering
        y ^= y >> 11;
        y ^= (y << 7) & 0x9d2c_5680;
        y ^= (y << 15) & 0xefc6_0000;
        y ^= y >> 18;
        y
    }

    /// Regenerate all 624 words of state.
    fn twist(&mut self) {
        for i in 0..N {
            let y = (self.state[i] & UPPER_MASK) | (self.state[(i + 1) % N] & LOWER_MASK);
            let mut next = self.state[(i + M) % N] ^ (y >> 1);
            if y & 1 != 0 {
                next ^= MATRIX_A;
            }
            self.state[i] = next;
        }
        self.index = 0;
    }
}

impl RandomSource for MersenneTwister {
    fn next_u32(&mut self) -> u32 {
        MersenneTwister::next_u32(self)
    }
}

impl std::fmt::Debug for MersenneTwister {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MersenneTwister")
            .field("index", &self.index)
            .finish_non_exhaustive()
    }
}
