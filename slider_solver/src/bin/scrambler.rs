use anyhow::{ensure, Result};
use clap::Parser;
use log::{debug, LevelFilter};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use slider_solver::logging::init_logging;
use slider_solver::parser::MIN_DIMENSION;
use slider_solver::scramble::{is_solvable_by_parity, random_board, scrambled_board};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints a random sliding-puzzle board", long_about = None)]
struct Args {
    /// Board dimension n
    #[clap(short, long, default_value_t = 3)]
    size: usize,

    /// Make the board by sliding the blank this many times from the goal (always solvable).
    /// Without it, the tiles are shuffled uniformly and the board may be unsolvable.
    #[clap(short, long)]
    moves: Option<usize>,

    /// Seed for reproducible boards; a random seed is used when omitted
    #[clap(long)]
    seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace); overrides SLIDER_SOLVER_LOG
    #[clap(long)]
    log_level: Option<LevelFilter>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);
    ensure!(
        args.size >= MIN_DIMENSION,
        "board size must be at least {}, got {}",
        MIN_DIMENSION,
        args.size
    );

    let seed = args.seed.unwrap_or_else(rand::random);
    debug!("using seed {}", seed);
    let mut rng = SmallRng::seed_from_u64(seed);

    let board = match args.moves {
        Some(steps) => scrambled_board(args.size, steps, &mut rng),
        None => random_board(args.size, &mut rng),
    };
    debug!("board solvable by parity: {}", is_solvable_by_parity(&board));

    print!("{}", board);
    Ok(())
}
