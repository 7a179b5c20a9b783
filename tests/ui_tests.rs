mod common;

use std::io::{self, Cursor, Write};

use common::single_ship_side;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    parse_axis, ui, CliPlayer, Fleet, Game, GameStatus, Orientation, Player, ShotOutcome, SideId,
    BOARD_SIZE, NUM_SHIPS,
};

#[test]
fn test_render_hides_opponent_ships() {
    let mut game = Game::from_sides(
        single_ship_side(2, 0, 0, Orientation::Horizontal),
        single_ship_side(3, 1, 1, Orientation::Vertical),
    );
    game.player_turn(1, 1).unwrap();
    game.player_turn(9, 9).unwrap();

    let hidden = ui::render_board(game.computer().board(), false);
    let lines: Vec<&str> = hidden.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "   0 1 2 3 4 5 6 7 8 9");
    assert_eq!(lines[2], " 1 ~ X ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[3], " 2 ~ ~ ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(lines[10], " 9 ~ ~ ~ ~ ~ ~ ~ ~ ~ o");
    assert!(!hidden.contains('B'));

    let shown = ui::render_board(game.computer().board(), true);
    assert_eq!(shown.lines().nth(3).unwrap(), " 2 ~ B ~ ~ ~ ~ ~ ~ ~ ~");
    assert_eq!(shown.matches('B').count(), 2);
}

#[test]
fn test_outcome_messages() {
    let mut rng = SmallRng::seed_from_u64(11);
    let game = Game::new(BOARD_SIZE, NUM_SHIPS, &mut rng).unwrap();
    let fleet = game.computer().fleet();
    assert!(fleet.is_standard());
    assert_eq!(
        ui::describe_outcome(ShotOutcome::Hit { ship: 2, sunk: true }, SideId::Player, fleet),
        "Hit and sunk the Cruiser!"
    );
    assert_eq!(
        ui::describe_outcome(ShotOutcome::Hit { ship: 0, sunk: false }, SideId::Computer, fleet),
        "Hit!"
    );
    assert_eq!(
        ui::describe_outcome(ShotOutcome::Miss, SideId::Player, fleet),
        "Miss."
    );
    assert_eq!(
        ui::describe_outcome(ShotOutcome::AlreadyFired, SideId::Player, fleet),
        "You already fired there."
    );
    assert_eq!(ui::end_message(GameStatus::Lost), "The computer wins!");
    assert_eq!(ui::end_message(GameStatus::Won), "Congratulations, you win!");
}

#[test]
fn test_custom_fleet_sinks_are_unnamed() {
    let mut side = single_ship_side(2, 4, 4, Orientation::Horizontal);
    side.receive_fire(4, 4).unwrap();
    let last = side.receive_fire(4, 5).unwrap();
    assert!(last.is_sunk());
    assert!(!side.fleet().is_standard());
    assert_eq!(side.fleet().ship_name(0), None);
    assert_eq!(
        ui::describe_outcome(last, SideId::Player, side.fleet()),
        "Hit and sunk the ship!"
    );
    assert_eq!(Fleet::default().ship_name(0), None);
}

#[test]
fn test_banner_is_boxed() {
    let b = ui::banner("GAME OVER");
    let lines: Vec<&str> = b.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "║  GAME OVER  ║");
    assert_eq!(lines[0].chars().count(), lines[1].chars().count());
}

#[test]
fn test_parse_axis() {
    assert_eq!(parse_axis("3\n"), Some(3));
    assert_eq!(parse_axis("  0 "), Some(0));
    assert_eq!(parse_axis("9"), Some(9));
    assert_eq!(parse_axis("10"), None);
    assert_eq!(parse_axis("-1"), None);
    assert_eq!(parse_axis("x"), None);
    assert_eq!(parse_axis(""), None);
}

#[test]
fn test_cli_player_reprompts_until_valid() {
    let input = Cursor::new("abc\n12\n4\n-3\n7\n");
    let mut out = Vec::new();
    let mut rng = SmallRng::seed_from_u64(0);
    let game = Game::from_sides(
        single_ship_side(2, 0, 0, Orientation::Horizontal),
        single_ship_side(2, 0, 0, Orientation::Horizontal),
    );
    {
        let mut player = CliPlayer::new(input, &mut out);
        let target = player
            .select_target(&mut rng, game.computer().board())
            .unwrap();
        assert_eq!(target, (4, 7));
        player.handle_outcome(target, ShotOutcome::Miss, game.computer().fleet());
    }
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Please enter a whole number").count(), 3);
    assert!(text.contains("You fired at (4, 7): Miss."));
}

#[test]
fn test_cli_player_errors_on_closed_input() {
    let mut player = CliPlayer::new(Cursor::new("5\n"), Vec::new());
    let mut rng = SmallRng::seed_from_u64(0);
    let side = single_ship_side(2, 0, 0, Orientation::Horizontal);
    assert!(player.select_target(&mut rng, side.board()).is_err());
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_outcome_report_survives_write_failure() {
    let side = single_ship_side(2, 0, 0, Orientation::Horizontal);
    let mut player = CliPlayer::new(Cursor::new(""), BrokenPipe);
    // The failed write is logged, not propagated or panicked on.
    player.handle_outcome((3, 3), ShotOutcome::Miss, side.fleet());
}
