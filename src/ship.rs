//! Ship geometry and damage tracking.

use core::fmt;

use crate::common::GameError;
use crate::config::{MAX_SHIP_LENGTH, MIN_SHIP_LENGTH};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Segments extend along the row, towards higher columns.
    Horizontal,
    /// Segments extend down the column, towards higher rows.
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship anchored at `(row, col)` with a hit counter.
///
/// Board bounds are not checked here; that is `Board::can_place`'s job.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    row: usize,
    col: usize,
    orientation: Orientation,
    hits: usize,
}

impl Ship {
    /// Build an undamaged ship. Fails if `length` is outside `[2, 5]`.
    pub fn new(
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Self, GameError> {
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(GameError::InvalidShipLength(length));
        }
        Ok(Ship {
            length,
            row,
            col,
            orientation,
            hits: 0,
        })
    }

    /// Cells covered by the ship, from the origin outwards.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.row, self.col + i),
            Orientation::Vertical => (self.row + i, self.col),
        })
    }

    /// Whether `(row, col)` is one of the ship's segments.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Count one more hit, saturating at the ship's length.
    pub(crate) fn register_hit(&mut self) {
        if self.hits < self.length {
            self.hits += 1;
        }
    }

    /// Check if the ship is sunk (every segment hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ length: {}, origin: ({}, {}), orientation: {:?}, hits: {} }}",
            self.length, self.row, self.col, self.orientation, self.hits,
        )
    }
}
