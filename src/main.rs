use std::thread;
use std::time::Duration;

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, ui, CliPlayer, Game, Player, SideId, BOARD_SIZE, NUM_SHIPS,
};

#[derive(Parser)]
#[command(author, version, about = "Sink the computer's fleet before it sinks yours.", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1000, help = "Pause before the computer fires, in milliseconds")]
    delay_ms: u64,
    #[arg(long, help = "Show the computer's ships")]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(BOARD_SIZE, NUM_SHIPS, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut human = CliPlayer::stdio();
    let delay = Duration::from_millis(cli.delay_ms);

    ui::print_player_view(&game, cli.reveal);
    while !game.is_over() {
        println!("\n{}", ui::banner("YOUR TURN"));
        let (r, c) = human.select_target(&mut rng, game.computer().board())?;
        let outcome = game.player_turn(r, c).map_err(|e| anyhow::anyhow!(e))?;
        human.handle_outcome((r, c), outcome, game.computer().fleet());
        println!("\nComputer board:");
        print!("{}", ui::render_board(game.computer().board(), cli.reveal));
        if game.is_over() {
            break;
        }

        println!("\n{}", ui::banner("COMPUTER'S TURN"));
        thread::sleep(delay);
        let ((r, c), outcome) = game
            .computer_turn(&mut rng)
            .map_err(|e| anyhow::anyhow!(e))?;
        println!(
            "The computer fired at ({}, {}): {}",
            r,
            c,
            ui::describe_outcome(outcome, SideId::Computer, game.player().fleet())
        );
        println!("\nYour board:");
        print!("{}", ui::render_board(game.player().board(), true));
    }

    println!("\n{}", ui::banner("GAME OVER"));
    ui::print_player_view(&game, true);
    println!("\n{}", ui::end_message(game.status()));
    Ok(())
}
