//! Injectable sources of random bits for share generation
//!
//! Share generation draws exactly one bit per source pixel. Production code
//! uses [`RandomBits`] over any [`rand::Rng`]; tests can replay a fixed
//! [`BitSequence`] to pin down exact tile placement.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces the next bit of a (pseudo-)random stream
pub trait BitSource {
    /// Draw one bit (`false` = 0, `true` = 1)
    fn next_bit(&mut self) -> bool;
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    fn next_bit(&mut self) -> bool {
        (**self).next_bit()
    }
}

/// Uniform bits drawn from a general-purpose random generator
///
/// Not suitable where cryptographic strength is required.
#[derive(Debug, Clone)]
pub struct RandomBits<R> {
    rng: R,
}

impl<R: Rng> RandomBits<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomBits<StdRng> {
    /// Deterministic stream for reproducible shares
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Stream seeded from operating system entropy
    pub fn from_os_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> BitSource for RandomBits<R> {
    fn next_bit(&mut self) -> bool {
        self.rng.random()
    }
}

/// Replays a fixed list of bits, wrapping around when exhausted
///
/// An empty sequence yields zeros.
#[derive(Debug, Clone, Default)]
pub struct BitSequence {
    bits: Vec<bool>,
    cursor: usize,
}

impl BitSequence {
    /// Create a sequence from explicit bits
    pub fn new(bits: impl Into<Vec<bool>>) -> Self {
        Self {
            bits: bits.into(),
            cursor: 0,
        }
    }

    /// A sequence that always yields the same bit
    pub fn constant(bit: bool) -> Self {
        Self::new(vec![bit])
    }

    /// Number of bits drawn so far
    pub const fn drawn(&self) -> usize {
        self.cursor
    }
}

impl BitSource for BitSequence {
    fn next_bit(&mut self) -> bool {
        let bit = self
            .bits
            .get(self.cursor.checked_rem(self.bits.len()).unwrap_or(0))
            .copied()
            .unwrap_or(false);
        self.cursor += 1;
        bit
    }
}
