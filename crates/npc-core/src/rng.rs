//! Deterministic simulation-level RNG.
//!
//! The navigation and behavior core is itself deterministic; randomness is
//! only used by applications (scene generation, target wander) and by the
//! property tests.  `SimRng` wraps a seeded `SmallRng` so the same seed always
//! reproduces the same run.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Vec2;

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts.  If you need parallel randomness,
/// give each worker its own `SimRng` via [`child`](Self::child).
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform point inside the axis-aligned box `[min, max)`.
    ///
    /// A degenerate axis (`min == max`) yields that coordinate unchanged.
    pub fn point_in(&mut self, min: Vec2, max: Vec2) -> Vec2 {
        let x = if max.x > min.x { self.0.gen_range(min.x..max.x) } else { min.x };
        let y = if max.y > min.y { self.0.gen_range(min.y..max.y) } else { min.y };
        Vec2::new(x, y)
    }
}
