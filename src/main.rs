use std::io;

use battleship::{cli, init_logging, MAX_MISSES};
use clap::Parser;
use log::LevelFilter;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Single-player Battleship against a hidden fleet", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = MAX_MISSES, help = "Misses allowed before a round is lost")]
    max_misses: usize,
}

fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Cli::parse();

    let mut rng = if let Some(s) = args.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    cli::run(&mut input, &mut output, &mut rng, args.max_misses)
}
