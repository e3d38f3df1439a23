//! Deterministic per-unit RNG.
//!
//! # Determinism strategy
//!
//! Generation is split into independent *units*: one entity for the Random
//! Direction model, one group for the Column model.  Each unit gets its own
//! `SmallRng` seeded by:
//!
//!   seed = scenario_seed XOR (unit * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive unit indices across the seed space.  Because no
//! stream is shared between units, the order in which units run (or the
//! number of threads running them) cannot change the drawn values: the same
//! seed and parameters always produce the same waypoints.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Uniform random source for one generation unit.
///
/// Intentionally neither `Clone` nor `Sync`: a substream has exactly one
/// consumer.
pub struct UnitRng(SmallRng);

impl UnitRng {
    /// Seed deterministically from the scenario seed and a unit index.
    pub fn for_unit(scenario_seed: u64, unit: u64) -> Self {
        let seed = scenario_seed ^ unit.wrapping_mul(MIXING_CONSTANT);
        UnitRng(SmallRng::seed_from_u64(seed))
    }

    /// Uniform value in `[0, 1)`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// `(hi - lo) * u + lo`.  Unlike `gen_range` this accepts `lo == hi`,
    /// which is how a fixed speed or pause is configured.
    #[inline]
    pub fn uniform_between(&mut self, lo: f64, hi: f64) -> f64 {
        (hi - lo) * self.uniform() + lo
    }
}
