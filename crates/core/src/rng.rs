//! RNG module - uniform piece selection
//!
//! Each spawn picks one of the seven kinds independently and uniformly at
//! random. There is no bag and no fairness guarantee.
//!
//! The generator is seedable so a run can be replayed; an unseeded generator
//! draws its seed from the OS.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Uniform i.i.d. piece generator
#[derive(Debug, Clone)]
pub struct PieceRng {
    rng: StdRng,
    seed: Option<u64>,
}

impl PieceRng {
    /// Create a generator with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed this generator was built from, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.gen_range(0..PieceKind::ALL.len());
        PieceKind::ALL[idx]
    }
}
