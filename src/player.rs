use crate::{board::Board, common::ShotOutcome, fleet::Fleet};
use rand::rngs::SmallRng;

/// Interface implemented by the different ways of choosing where to fire.
pub trait Player {
    /// Choose the next coordinate to fire at on `target`.
    fn select_target(&mut self, rng: &mut SmallRng, target: &Board)
        -> anyhow::Result<(usize, usize)>;

    /// Inform the player of the result of its last shot against `target`.
    fn handle_outcome(
        &mut self,
        _coord: (usize, usize),
        _outcome: ShotOutcome,
        _target: &Fleet,
    ) {
    }
}
