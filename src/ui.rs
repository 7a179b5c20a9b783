#![cfg(feature = "std")]

//! Terminal rendering of boards, shot outcomes and end-of-game messages.

use std::fmt::Write as _;
use std::string::String;

use crate::{
    board::{Board, CellState},
    common::ShotOutcome,
    fleet::Fleet,
    game::{Game, GameStatus, SideId},
};

/// Glyph for a cell. Ships are only drawn when `reveal` is set.
pub fn cell_glyph(cell: CellState, reveal: bool) -> char {
    match cell {
        CellState::Water => '~',
        CellState::WaterShot => 'o',
        CellState::ShipPresent if reveal => 'B',
        CellState::ShipPresent => '~',
        CellState::Wrecked => 'X',
    }
}

/// Render `board` with column numbers on top and row numbers on the left.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("  ");
    for c in 0..board.size() {
        let _ = write!(out, " {}", c);
    }
    out.push('\n');
    for (r, row) in board.rows().enumerate() {
        let _ = write!(out, "{:2}", r);
        for &cell in row {
            let _ = write!(out, " {}", cell_glyph(cell, reveal));
        }
        out.push('\n');
    }
    out
}

/// Boxed banner announcing a phase of the game.
pub fn banner(title: &str) -> String {
    let width = title.chars().count() + 4;
    let rule = "═".repeat(width);
    std::format!("╔{rule}╗\n║  {title}  ║\n╚{rule}╝")
}

/// Describe a shot outcome from the shooter's side. `target` is the fleet
/// that was fired upon.
pub fn describe_outcome(outcome: ShotOutcome, shooter: SideId, target: &Fleet) -> String {
    match (outcome, shooter) {
        (ShotOutcome::Hit { ship, sunk: true }, _) => std::format!(
            "Hit and sunk the {}!",
            target.ship_name(ship).unwrap_or("ship")
        ),
        (ShotOutcome::Hit { .. }, _) => String::from("Hit!"),
        (ShotOutcome::Miss, _) => String::from("Miss."),
        (ShotOutcome::AlreadyFired, SideId::Player) => {
            String::from("You already fired there.")
        }
        (ShotOutcome::AlreadyFired, SideId::Computer) => {
            String::from("The computer already fired there.")
        }
    }
}

/// Closing line for a finished game.
pub fn end_message(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Won => "Congratulations, you win!",
        GameStatus::Lost => "The computer wins!",
        GameStatus::Draw => "Both fleets went down together. It's a draw.",
        GameStatus::InProgress => "The game is still in progress.",
    }
}

/// Display the player's board (ships shown) and the computer's board.
pub fn print_player_view(game: &Game, reveal_computer: bool) {
    std::println!("Your board:");
    std::print!("{}", render_board(game.player().board(), true));
    std::println!("\nComputer board:");
    std::print!("{}", render_board(game.computer().board(), reveal_computer));
}
