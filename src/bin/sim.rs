use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{init_logging, AiPlayer, Game, GameStatus, Player, BOARD_SIZE, NUM_SHIPS};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <seed1> <seed2>", args[0]);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;

    // rng1 deploys both fleets and aims the player's shots; rng2 aims the computer's.
    let mut rng1 = SmallRng::seed_from_u64(seed1);
    let mut rng2 = SmallRng::seed_from_u64(seed2);

    let mut game = Game::new(BOARD_SIZE, NUM_SHIPS, &mut rng1).map_err(|e| anyhow::anyhow!(e))?;
    let mut stand_in = AiPlayer::new();
    let mut player_shots = 0usize;
    let mut computer_shots = 0usize;

    while !game.is_over() {
        let (r, c) = stand_in.select_target(&mut rng1, game.computer().board())?;
        let outcome = game.player_turn(r, c).map_err(|e| anyhow::anyhow!(e))?;
        stand_in.handle_outcome((r, c), outcome, game.computer().fleet());
        player_shots += 1;
        if game.is_over() {
            break;
        }
        game.computer_turn(&mut rng2)
            .map_err(|e| anyhow::anyhow!(e))?;
        computer_shots += 1;
    }

    let status = game.status();
    let winner = match status {
        GameStatus::Won => Some("player"),
        GameStatus::Lost => Some("computer"),
        _ => None,
    };

    let result = json!({
        "player": {"shots": player_shots, "ships_afloat": game.player().fleet().afloat()},
        "computer": {"shots": computer_shots, "ships_afloat": game.computer().fleet().afloat()},
        "status": status,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
