//! Plays one seeded round with random, non-repeating guesses and prints a
//! JSON summary.

use battleship::{init_logging, Coordinate, Game, GameStatus, MAX_MISSES};
use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde_json::json;

#[derive(Parser)]
#[command(about = "Simulate a Battleship round with random guesses")]
struct Args {
    seed: u64,
    #[arg(long, default_value_t = MAX_MISSES)]
    max_misses: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Args::parse();

    let mut rng = SmallRng::seed_from_u64(args.seed);
    let mut game = Game::new(args.max_misses, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

    let mut targets: Vec<Coordinate> = Coordinate::all().collect();
    targets.shuffle(&mut rng);

    let mut guesses = 0usize;
    for coord in targets {
        if game.status() != GameStatus::InProgress {
            break;
        }
        game.guess(coord).map_err(|e| anyhow::anyhow!(e))?;
        guesses += 1;
    }

    let sunk: Vec<&str> = game.sunk_ships().collect();
    let result = json!({
        "seed": args.seed,
        "outcome": game.status(),
        "misses": game.misses().len(),
        "guesses": guesses,
        "sunk": sunk,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
