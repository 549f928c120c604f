//! # Sliding Puzzle Solver Library
//!
//! This library solves `n`x`n` sliding puzzles (the 8-puzzle, 15-puzzle and
//! friends) with an A* search guided by the Manhattan distance. The same
//! search also decides whether a board is solvable at all: it runs a second
//! search from the board's "twin" and stops as soon as either one reaches the
//! goal.
//!
//! It is used by two binaries:
//! - `solver`: reads board files and prints a shortest solution.
//! - `scrambler`: prints random boards in the same text format.
//!
//! ## Modules
//! - `board`: The immutable `Board`, its heuristics, neighbors and twin.
//! - `heuristics`: Hamming and Manhattan distances over raw tile slices.
//! - `node`: `SearchNode` and the frontier ordering.
//! - `solver`: The dual A* search (`Solver`).
//! - `parser`: Reading boards from the text format.
//! - `scramble`: Random boards and the inversion-parity solvability test.
//! - `error`: Error types.
//! - `logging`: Logger setup for the binaries.

pub mod board;
pub mod error;
pub mod heuristics;
pub mod logging;
pub mod node;
pub mod parser;
pub mod scramble;
pub mod solver;

pub use board::Board;
pub use error::{ParseError, SolverError};
pub use solver::{SearchStats, Solver, SolverState};
