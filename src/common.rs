//! Common types for the game engine: errors and shot outcomes.

/// Result of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    /// Shot landed on water.
    Miss,
    /// Shot struck the ship at index `ship` of the fleet. `sunk` is set when
    /// this hit was the ship's last intact segment.
    Hit { ship: usize, sunk: bool },
    /// Cell had already been fired upon; nothing changed.
    AlreadyFired,
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit { .. })
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, ShotOutcome::Hit { sunk: true, .. })
    }
}

/// Contract violations reported by the engine.
///
/// None of these are normal game outcomes; they mean a caller handed the
/// engine a configuration or coordinate it must never see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board side length differs from the fixed configuration.
    InvalidBoardSize { expected: usize, actual: usize },
    /// Ship length outside the accepted range.
    InvalidShipLength(usize),
    /// Ship would leave the board or overlap another ship.
    PlacementRejected { row: usize, col: usize },
    /// Fleet deployment asked for the wrong number of ships.
    FleetSizeMismatch { expected: usize, actual: usize },
    /// Random deployment could not find a slot for a ship.
    PlacementExhausted { length: usize },
    /// Coordinate lies outside the board.
    CoordinateOutOfBounds { row: usize, col: usize },
    /// A cell holds a ship segment that no ship in the fleet claims.
    UnknownShipHit { row: usize, col: usize },
    /// Every cell of the target board has already been fired upon.
    NoTargetsLeft,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::InvalidBoardSize { expected, actual } => {
                write!(f, "Board size must be {}, got {}", expected, actual)
            }
            GameError::InvalidShipLength(len) => write!(f, "Invalid ship length {}", len),
            GameError::PlacementRejected { row, col } => {
                write!(f, "Ship cannot be placed at ({}, {})", row, col)
            }
            GameError::FleetSizeMismatch { expected, actual } => {
                write!(f, "Fleet must have {} ships, got {}", expected, actual)
            }
            GameError::PlacementExhausted { length } => {
                write!(f, "Unable to place ship of length {}", length)
            }
            GameError::CoordinateOutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is outside the board", row, col)
            }
            GameError::UnknownShipHit { row, col } => {
                write!(f, "No ship in the fleet occupies ({}, {})", row, col)
            }
            GameError::NoTargetsLeft => write!(f, "Every cell has already been fired upon"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
