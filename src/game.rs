use crate::{
    ai,
    board::Board,
    common::{GameError, ShotOutcome},
    config::{BOARD_SIZE, NUM_SHIPS},
    fleet::Fleet,
    random::RandomSource,
    shot,
};

/// Which side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideId {
    Player,
    Computer,
}

/// Current status of a game, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
    /// Both fleets wrecked. Unreachable when turns alternate one shot at a
    /// time, but reported rather than guessed when a driver fires out of turn.
    Draw,
}

/// One side's board together with the fleet placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Side {
    board: Board,
    fleet: Fleet,
}

impl Side {
    /// Fresh board of `size` with a randomly deployed fleet of `fleet_size`.
    pub fn deploy<R: RandomSource + ?Sized>(
        size: usize,
        fleet_size: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let mut board = Board::new(size)?;
        let fleet = Fleet::deploy(&mut board, fleet_size, rng)?;
        Ok(Self { board, fleet })
    }

    /// Pair an already populated board with its fleet.
    pub fn from_parts(board: Board, fleet: Fleet) -> Self {
        Self { board, fleet }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Resolve a shot against this side.
    pub fn receive_fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        shot::fire(&mut self.board, &mut self.fleet, row, col)
    }
}

/// Human versus computer match state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    player: Side,
    computer: Side,
}

impl Game {
    /// Build both boards and deploy both fleets, the player's first.
    pub fn new<R: RandomSource + ?Sized>(
        size: usize,
        fleet_size: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        if size != BOARD_SIZE {
            return Err(GameError::InvalidBoardSize {
                expected: BOARD_SIZE,
                actual: size,
            });
        }
        if fleet_size != NUM_SHIPS {
            return Err(GameError::FleetSizeMismatch {
                expected: NUM_SHIPS,
                actual: fleet_size,
            });
        }
        let player = Side::deploy(size, fleet_size, rng)?;
        let computer = Side::deploy(size, fleet_size, rng)?;
        log::info!("new game on a {}x{} board", size, size);
        Ok(Self { player, computer })
    }

    /// Assemble a game from prepared sides.
    pub fn from_sides(player: Side, computer: Side) -> Self {
        Self { player, computer }
    }

    pub fn player(&self) -> &Side {
        &self.player
    }

    pub fn computer(&self) -> &Side {
        &self.computer
    }

    pub fn side(&self, id: SideId) -> &Side {
        match id {
            SideId::Player => &self.player,
            SideId::Computer => &self.computer,
        }
    }

    /// The player fires at the computer's board.
    pub fn player_turn(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        self.computer.receive_fire(row, col)
    }

    /// The computer picks an unfired cell on the player's board and fires.
    pub fn computer_turn<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<((usize, usize), ShotOutcome), GameError> {
        let (row, col) = ai::select_target(self.player.board(), rng)?;
        let outcome = self.player.receive_fire(row, col)?;
        Ok(((row, col), outcome))
    }

    /// Whether every ship of `id`'s fleet is sunk.
    pub fn is_fleet_wrecked(&self, id: SideId) -> bool {
        self.side(id).fleet().is_wrecked()
    }

    /// True once either fleet is wrecked.
    pub fn is_over(&self) -> bool {
        self.is_fleet_wrecked(SideId::Player) || self.is_fleet_wrecked(SideId::Computer)
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        match (
            self.is_fleet_wrecked(SideId::Player),
            self.is_fleet_wrecked(SideId::Computer),
        ) {
            (true, true) => GameStatus::Draw,
            (true, false) => GameStatus::Lost,
            (false, true) => GameStatus::Won,
            (false, false) => GameStatus::InProgress,
        }
    }
}
