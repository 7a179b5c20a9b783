//! A side's ships and their random deployment.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::GameError;
use crate::config::{fleet_lengths, ship_name, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::random::RandomSource;
use crate::ship::{Orientation, Ship};

/// Ships belonging to one board, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Randomly place the standard fleet on `board`.
    ///
    /// Each ship in `[5, 4, 3, 3, 2]` order gets a uniform row, column and
    /// orientation, redrawn until it fits. `fleet_size` must equal
    /// `NUM_SHIPS`.
    pub fn deploy<R: RandomSource + ?Sized>(
        board: &mut Board,
        fleet_size: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if fleet_size != NUM_SHIPS {
            return Err(GameError::FleetSizeMismatch {
                expected: NUM_SHIPS,
                actual: fleet_size,
            });
        }
        let mut fleet = Fleet::default();
        for length in fleet_lengths() {
            let ship = random_placement(board, length, rng)?;
            board.place(&ship)?;
            log::debug!("placed {:?}", ship);
            fleet.ships.push(ship);
        }
        Ok(fleet)
    }

    /// Place `ship` on `board` and append it to the fleet.
    pub fn add(&mut self, board: &mut Board, ship: Ship) -> Result<(), GameError> {
        board.place(&ship)?;
        self.ships.push(ship);
        Ok(())
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    /// Index of the first ship covering (row, col).
    pub fn ship_at(&self, row: usize, col: usize) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(row, col))
    }

    pub(crate) fn ship_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.ships.get_mut(index)
    }

    /// Whether the fleet matches the standard configuration ship for ship.
    pub fn is_standard(&self) -> bool {
        self.ships.len() == NUM_SHIPS
            && self
                .ships
                .iter()
                .zip(fleet_lengths())
                .all(|(s, len)| s.length() == len)
    }

    /// Display name of the ship at `index`. Ships of a non-standard fleet
    /// have no configured name.
    pub fn ship_name(&self, index: usize) -> Option<&'static str> {
        if self.is_standard() {
            ship_name(index)
        } else {
            None
        }
    }

    /// Returns `true` when every ship is sunk.
    pub fn is_wrecked(&self) -> bool {
        self.ships.iter().all(|s| s.is_sunk())
    }

    /// Ships still afloat.
    pub fn afloat(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }
}

/// Draw candidates for a ship of `length` until one fits on `board`.
fn random_placement<R: RandomSource + ?Sized>(
    board: &Board,
    length: usize,
    rng: &mut R,
) -> Result<Ship, GameError> {
    let size = board.size();
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let row = rng.below(size);
        let col = rng.below(size);
        let orientation = if rng.coin() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let ship = Ship::new(length, row, col, orientation)?;
        if board.can_place(&ship) {
            return Ok(ship);
        }
        log::trace!("rejected {:?}", ship);
    }
    Err(GameError::PlacementExhausted { length })
}
