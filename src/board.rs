//! Board state: a square grid of cells stored as one flat buffer.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::GameError;
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Untouched, no ship.
    Water,
    /// Fired upon, no ship was there.
    WaterShot,
    /// Untouched ship segment.
    ShipPresent,
    /// Fired upon ship segment.
    Wrecked,
}

impl CellState {
    /// State after a shot lands. Fired cells stay as they are.
    pub fn after_shot(self) -> Self {
        match self {
            CellState::Water => CellState::WaterShot,
            CellState::ShipPresent => CellState::Wrecked,
            fired => fired,
        }
    }

    /// Whether this cell has already been fired upon.
    pub fn is_fired(self) -> bool {
        matches!(self, CellState::WaterShot | CellState::Wrecked)
    }
}

/// One side's grid.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
}

impl Board {
    /// Create an all-water board. Only the configured `BOARD_SIZE` is accepted.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size != BOARD_SIZE {
            return Err(GameError::InvalidBoardSize {
                expected: BOARD_SIZE,
                actual: size,
            });
        }
        Ok(Board {
            size,
            cells: vec![CellState::Water; size * size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// State of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<CellState, GameError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx])
    }

    /// Row-major view of the grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of cells currently in `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Whether any cell is still open to fire.
    pub fn has_unfired(&self) -> bool {
        self.cells.iter().any(|c| !c.is_fired())
    }

    /// Whether `ship` fits entirely on the board without touching another ship.
    pub fn can_place(&self, ship: &Ship) -> bool {
        ship.cells().all(|(r, c)| {
            matches!(self.cell(r, c), Ok(state) if state != CellState::ShipPresent)
        })
    }

    /// Mark every cell of `ship` as occupied. The board is left untouched when
    /// the ship does not fit.
    pub fn place(&mut self, ship: &Ship) -> Result<(), GameError> {
        if !self.can_place(ship) {
            let (row, col) = ship.origin();
            return Err(GameError::PlacementRejected { row, col });
        }
        for (r, c) in ship.cells() {
            let idx = self.index(r, c)?;
            self.cells[idx] = CellState::ShipPresent;
        }
        Ok(())
    }

    /// Apply a shot to (row, col) and return the cell's state before it.
    pub(crate) fn strike(&mut self, row: usize, col: usize) -> Result<CellState, GameError> {
        let idx = self.index(row, col)?;
        let before = self.cells[idx];
        self.cells[idx] = before.after_shot();
        Ok(before)
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GameError> {
        if row >= self.size || col >= self.size {
            return Err(GameError::CoordinateOutOfBounds { row, col });
        }
        Ok(row * self.size + col)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{ size: {} }}", self.size)?;
        for row in self.rows() {
            for cell in row {
                let ch = match cell {
                    CellState::Water => '.',
                    CellState::WaterShot => 'o',
                    CellState::ShipPresent => 'S',
                    CellState::Wrecked => 'X',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
