//! Immutable sliding-puzzle board.
//!
//! A `Board` is an `n`x`n` grid holding the tiles `1..n*n` and a single blank
//! (`0`). Boards are never mutated after construction: moving the blank or
//! swapping tiles produces a new `Board`.
//!
//! The heuristics and the neighbor list are computed on first access and
//! cached for the life of the board. Equality and hashing only look at the
//! dimension and the tiles, never at those caches.

use crate::heuristics;
use std::cell::OnceCell;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Value stored in a board cell.
pub type Tile = u32;

/// The tile value of the blank cell.
pub const BLANK: Tile = 0;

/// An immutable `n`x`n` sliding-puzzle board.
///
/// The grid must hold exactly one blank and a permutation of `1..n*n`. Board
/// construction does not check this; `parser::parse_board` is the place where
/// untrusted input gets validated.
///
/// # Examples
/// ```
/// use slider_solver::board::Board;
///
/// let board = Board::from_rows(&[[1, 2, 3], [4, 5, 6], [7, 0, 8]]);
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.hamming(), 1);
/// assert_eq!(board.manhattan(), 1);
/// assert!(!board.is_goal());
/// assert_eq!(board.neighbors().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    n: usize,
    tiles: Box<[Tile]>,
    hamming: OnceCell<usize>,
    manhattan: OnceCell<usize>,
    neighbors: OnceCell<Vec<Board>>,
}

impl Board {
    /// Creates a board from `n` rows of `n` tiles each.
    ///
    /// # Panics
    /// Panics if any row length differs from the number of rows.
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R]) -> Self {
        let n = rows.len();
        let mut tiles = Vec::with_capacity(n * n);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), n, "board rows must have {} tiles", n);
            tiles.extend_from_slice(row);
        }
        Board::from_tiles(n, tiles)
    }

    /// Creates a board of dimension `n` from its tiles in row-major order.
    ///
    /// # Panics
    /// Panics if `tiles` does not hold exactly `n * n` values.
    pub fn from_tiles(n: usize, tiles: Vec<Tile>) -> Self {
        assert_eq!(tiles.len(), n * n, "a {n}x{n} board needs {} tiles", n * n);
        Board {
            n,
            tiles: tiles.into_boxed_slice(),
            hamming: OnceCell::new(),
            manhattan: OnceCell::new(),
            neighbors: OnceCell::new(),
        }
    }

    /// Returns the solved board of dimension `n`.
    pub fn goal(n: usize) -> Self {
        let tiles = (0..n * n).map(|i| heuristics::goal_tile(n, i)).collect();
        Board::from_tiles(n, tiles)
    }

    /// Board dimension `n`.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// All tiles in row-major order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Returns the tile at row `r` and column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board.
    pub fn tile(&self, r: usize, c: usize) -> Tile {
        assert!(r < self.n && c < self.n, "({r}, {c}) is outside a {0}x{0} board", self.n);
        self.tiles[r * self.n + c]
    }

    /// Returns the (row, column) of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        let index = self.blank_index();
        (index / self.n, index % self.n)
    }

    fn blank_index(&self) -> usize {
        // A well-formed board always has a blank; an empty 0x0 board falls back to 0.
        self.tiles.iter().position(|&t| t == BLANK).unwrap_or(0)
    }

    /// Number of non-blank tiles out of place. Memoized.
    pub fn hamming(&self) -> usize {
        *self
            .hamming
            .get_or_init(|| heuristics::hamming(self.n, &self.tiles))
    }

    /// Sum of the Manhattan distances of all non-blank tiles to their goal cells. Memoized.
    pub fn manhattan(&self) -> usize {
        *self
            .manhattan
            .get_or_init(|| heuristics::manhattan(self.n, &self.tiles))
    }

    /// Returns `true` if this is the solved board.
    pub fn is_goal(&self) -> bool {
        self.hamming() == 0
    }

    /// Boards reachable by sliding one tile into the blank.
    ///
    /// The blank is swapped with its left, right, upper and lower neighbor, in
    /// that order, skipping directions that leave the grid. A corner blank
    /// yields 2 boards, an edge blank 3 and an interior blank 4. The list is
    /// computed once and cached.
    pub fn neighbors(&self) -> &[Board] {
        self.neighbors.get_or_init(|| {
            let n = self.n;
            let blank = self.blank_index();
            let (row, col) = (blank / n, blank % n);

            let mut targets = Vec::with_capacity(4);
            if col > 0 {
                targets.push(blank - 1);
            }
            if col + 1 < n {
                targets.push(blank + 1);
            }
            if row > 0 {
                targets.push(blank - n);
            }
            if row + 1 < n {
                targets.push(blank + n);
            }

            targets
                .into_iter()
                .map(|target| self.swapped(blank, target))
                .collect()
        })
    }

    /// Returns a board with the first two non-blank tiles (row-major) exchanged.
    ///
    /// The twin is not reachable by legal moves; it has the opposite solvability
    /// of `self`, which lets the solver detect unsolvable boards.
    ///
    /// # Panics
    /// Panics if the board has fewer than two non-blank tiles.
    pub fn twin(&self) -> Board {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &t)| t != BLANK)
            .map(|(i, _)| i);
        match (non_blank.next(), non_blank.next()) {
            (Some(first), Some(second)) => self.swapped(first, second),
            _ => panic!("a twin needs at least two non-blank tiles"),
        }
    }

    fn swapped(&self, a: usize, b: usize) -> Board {
        let mut tiles = self.tiles.to_vec();
        tiles.swap(a, b);
        Board::from_tiles(self.n, tiles)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.tiles == other.tiles
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.n.hash(state);
        self.tiles.hash(state);
    }
}

impl fmt::Display for Board {
    /// Writes the board in the text format accepted by `parser::parse_board`:
    /// the dimension on the first line, then one line per row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        for row in self.tiles.chunks(self.n.max(1)) {
            for &t in row {
                write!(f, "{:2} ", t)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
