//! Product id assignment.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use catalog_core::ProductId;

/// Ids are drawn from `[0, ID_SPACE)`.
pub const ID_SPACE: u32 = 1_000_000;

/// Source of candidate ids for new products.
///
/// Generators only propose ids; the repository decides whether a candidate
/// is free.
pub trait IdGenerator: Send + Sync {
    fn draw(&mut self) -> ProductId;
}

/// Uniform random ids over `[0, ID_SPACE)`.
#[derive(Debug)]
pub struct RandomIds {
    rng: StdRng,
}

impl RandomIds {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic stream, for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for RandomIds {
    fn draw(&mut self) -> ProductId {
        ProductId::new(self.rng.gen_range(0..ID_SPACE))
    }
}
