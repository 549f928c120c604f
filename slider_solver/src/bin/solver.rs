use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use slider_solver::logging::init_logging;
use slider_solver::parser::read_board;
use slider_solver::solver::Solver;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Finds a shortest solution for sliding puzzles", long_about = None)]
struct Args {
    /// Only print the number of moves, not the boards along the way
    #[clap(short, long)]
    quiet: bool,

    /// Log level (off, error, warn, info, debug, trace); overrides SLIDER_SOLVER_LOG
    #[clap(long)]
    log_level: Option<LevelFilter>,

    /// Board files: the dimension n followed by n*n tiles, 0 for the blank
    #[clap(required = true)]
    board_files: Vec<PathBuf>,
}

fn solve_file(path: &PathBuf, quiet: bool) -> Result<()> {
    let board = read_board(path)
        .with_context(|| format!("Failed to read board from file: {}", path.display()))?;
    info!("solving {}", path.display());

    let solver = Solver::new(board);
    let stats = solver.stats();
    info!(
        "{}: expanded {} nodes ({} on the twin)",
        path.display(),
        stats.expanded,
        stats.twin_expanded
    );

    match (solver.moves(), solver.solution()) {
        (Some(moves), Some(boards)) => {
            println!("Minimum number of moves = {}", moves);
            if !quiet {
                for board in boards {
                    println!("{}", board);
                }
            }
        }
        _ => println!("No solution possible"),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level);

    for path in &args.board_files {
        if args.board_files.len() > 1 {
            println!("{}:", path.display());
        }
        solve_file(path, args.quiet)?;
    }
    Ok(())
}
