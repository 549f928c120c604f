//! Goal-distance estimates for sliding-puzzle boards.
//!
//! Both functions work on a flat, row-major tile slice of an `n`x`n` board and
//! ignore the blank. `Board` memoizes their results, so the search never calls
//! them more than once per board.

use crate::board::{Tile, BLANK};

/// Returns the tile value that belongs at flat index `index` of a solved `n`x`n` board.
///
/// Tiles `1..n*n` fill the board in row-major order and the blank sits in the last cell.
pub fn goal_tile(n: usize, index: usize) -> Tile {
    ((index + 1) % (n * n)) as Tile
}

/// Returns the (row, column) a non-blank tile occupies on the solved board.
///
/// # Panics
/// Panics on underflow if `tile` is the blank.
pub fn goal_position(n: usize, tile: Tile) -> (usize, usize) {
    let offset = tile as usize - 1;
    (offset / n, offset % n)
}

/// Counts the non-blank tiles that are not in their goal position.
///
/// # Arguments
/// * `n`: The board dimension.
/// * `tiles`: The `n * n` tiles in row-major order.
///
/// # Returns
/// The Hamming distance as `usize`. A solved board yields 0.
pub fn hamming(n: usize, tiles: &[Tile]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(i, &t)| t != BLANK && t != goal_tile(n, i))
        .count()
}

/// Sums the row and column distances from each non-blank tile to its goal position.
///
/// # Arguments
/// * `n`: The board dimension.
/// * `tiles`: The `n * n` tiles in row-major order.
///
/// # Returns
/// The Manhattan distance as `usize`. It never overestimates the number of
/// slides left, which keeps A* optimal.
pub fn manhattan(n: usize, tiles: &[Tile]) -> usize {
    let mut distance = 0;
    for (i, &t) in tiles.iter().enumerate() {
        if t == BLANK {
            continue;
        }
        let (goal_row, goal_col) = goal_position(n, t);
        distance += (i / n).abs_diff(goal_row) + (i % n).abs_diff(goal_col);
    }
    distance
}
