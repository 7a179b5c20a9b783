#![allow(dead_code)]

use std::collections::VecDeque;

use seabattle::{Board, Fleet, Orientation, RandomSource, Ship, Side, BOARD_SIZE};

/// Replays a fixed list of draws. Coins read `1` as heads (horizontal).
pub struct ScriptedSource {
    draws: VecDeque<usize>,
    cycle: bool,
    taken: usize,
}

impl ScriptedSource {
    pub fn new(draws: &[usize]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
            cycle: false,
            taken: 0,
        }
    }

    /// Replays `draws` forever.
    pub fn repeating(draws: &[usize]) -> Self {
        Self {
            cycle: true,
            ..Self::new(draws)
        }
    }

    /// Number of draws handed out so far.
    pub fn taken(&self) -> usize {
        self.taken
    }

    fn next(&mut self) -> usize {
        let v = self.draws.pop_front().expect("script exhausted");
        if self.cycle {
            self.draws.push_back(v);
        }
        self.taken += 1;
        v
    }

    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, bound: usize) -> usize {
        let v = self.next();
        assert!(v < bound, "scripted draw {} not below {}", v, bound);
        v
    }

    fn coin(&mut self) -> bool {
        self.next() != 0
    }
}

/// Side with a single ship, handy for short scenarios.
pub fn single_ship_side(length: usize, row: usize, col: usize, o: Orientation) -> Side {
    let mut board = Board::new(BOARD_SIZE).unwrap();
    let mut fleet = Fleet::default();
    fleet
        .add(&mut board, Ship::new(length, row, col, o).unwrap())
        .unwrap();
    Side::from_parts(board, fleet)
}

/// Fire at every cell of every ship on `side`.
pub fn sink_all(side: &mut Side) {
    let cells: Vec<(usize, usize)> = side
        .fleet()
        .ships()
        .iter()
        .flat_map(|s| s.cells().collect::<Vec<_>>())
        .collect();
    for (r, c) in cells {
        side.receive_fire(r, c).unwrap();
    }
}
