//! Uniform random draws used by fleet deployment and computer targeting.

use rand::rngs::SmallRng;
use rand::Rng;

/// Source of uniform draws. Implemented for `SmallRng`; tests can supply a
/// scripted source to pin down placement and targeting.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn below(&mut self, bound: usize) -> usize;

    /// Fair coin.
    fn coin(&mut self) -> bool;
}

impl RandomSource for SmallRng {
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn coin(&mut self) -> bool {
        self.random()
    }
}
