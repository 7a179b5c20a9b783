//! Shot resolution against a board and the fleet sitting on it.

use crate::board::{Board, CellState};
use crate::common::{GameError, ShotOutcome};
use crate::fleet::Fleet;

/// Fire at (row, col).
///
/// Only the targeted cell and, on a hit, the struck ship's hit counter
/// change. Firing at a cell already shot leaves everything as it was.
pub fn fire(
    board: &mut Board,
    fleet: &mut Fleet,
    row: usize,
    col: usize,
) -> Result<ShotOutcome, GameError> {
    let outcome = match board.cell(row, col)? {
        CellState::ShipPresent => {
            let index = fleet
                .ship_at(row, col)
                .ok_or(GameError::UnknownShipHit { row, col })?;
            board.strike(row, col)?;
            let ship = fleet
                .ship_mut(index)
                .ok_or(GameError::UnknownShipHit { row, col })?;
            ship.register_hit();
            ShotOutcome::Hit {
                ship: index,
                sunk: ship.is_sunk(),
            }
        }
        CellState::Wrecked | CellState::WaterShot => ShotOutcome::AlreadyFired,
        CellState::Water => {
            board.strike(row, col)?;
            ShotOutcome::Miss
        }
    };
    log::debug!("shot at ({}, {}) -> {:?}", row, col, outcome);
    Ok(outcome)
}
