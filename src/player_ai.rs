use crate::{ai, board::Board};
use rand::rngs::SmallRng;

use crate::player::Player;

/// Computer player: uniform random targeting over cells not yet fired upon.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        target: &Board,
    ) -> anyhow::Result<(usize, usize)> {
        ai::select_target(target, rng).map_err(|e| anyhow::anyhow!(e))
    }
}
