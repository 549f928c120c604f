//! Random board generation and the inversion-parity solvability test.
//!
//! The solver never needs the parity test; it is here to generate puzzles
//! with a known answer and to cross-check the solver's twin search.

use crate::board::{Board, Tile, BLANK};
use rand::seq::SliceRandom;
use rand::Rng;

/// Counts pairs of non-blank tiles that appear in the wrong relative order.
pub fn count_inversions(tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t != BLANK)
        .map(|(i, &t)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&later| later != BLANK && later < t)
                .count()
        })
        .sum()
}

/// Decides solvability from the permutation parity alone.
///
/// On odd-sized boards a board is solvable iff its inversion count is even.
/// On even-sized boards every vertical slide also changes the blank's row, so
/// the inversion count plus the blank's row index must be odd.
///
/// # Examples
/// ```
/// use slider_solver::board::Board;
/// use slider_solver::scramble::is_solvable_by_parity;
///
/// assert!(is_solvable_by_parity(&Board::goal(4)));
/// assert!(!is_solvable_by_parity(&Board::goal(4).twin()));
/// ```
pub fn is_solvable_by_parity(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());
    if board.dimension() % 2 == 1 {
        inversions % 2 == 0
    } else {
        let (blank_row, _) = board.blank_position();
        (inversions + blank_row) % 2 == 1
    }
}

/// Returns a board with uniformly shuffled tiles. About half of these are unsolvable.
pub fn random_board<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Board {
    let mut tiles: Vec<Tile> = (0..(n * n) as Tile).collect();
    tiles.shuffle(rng);
    Board::from_tiles(n, tiles)
}

/// Returns a solvable board produced by `steps` random blank slides from the goal.
///
/// A slide never immediately undoes the previous one, but longer cycles are
/// possible, so the board can be fewer than `steps` moves from the goal.
pub fn scrambled_board<R: Rng + ?Sized>(n: usize, steps: usize, rng: &mut R) -> Board {
    let mut board = Board::goal(n);
    let mut previous: Option<Board> = None;
    for _ in 0..steps {
        let candidates: Vec<&Board> = board
            .neighbors()
            .iter()
            .filter(|&b| previous.as_ref() != Some(b))
            .collect();
        let Some(&next) = candidates.choose(rng) else {
            break;
        };
        let next = Board::from_tiles(n, next.tiles().to_vec());
        previous = Some(std::mem::replace(&mut board, next));
    }
    board
}
