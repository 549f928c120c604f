//! Parsing of boards in the plain-text puzzle format.
//!
//! The format is a whitespace-separated list of integers: the dimension `n`
//! followed by the `n * n` tiles in row-major order, with `0` for the blank.
//! Line breaks carry no meaning, so the output of `Board`'s `Display` impl
//! parses back to the same board.

use crate::board::{Board, Tile};
use crate::error::ParseError;
use log::debug;
use std::fs;
use std::path::Path;

/// Smallest board dimension accepted from text input.
pub const MIN_DIMENSION: usize = 2;

/// Parses a board from its text representation.
///
/// Unlike the `Board` constructors, which trust their input, this validates
/// that the tiles form a proper puzzle: exactly `n * n` values, each in
/// `0..n * n`, none repeated. A missing blank therefore shows up as a
/// duplicate or out-of-range tile.
///
/// # Arguments
/// * `input`: The text to parse.
///
/// # Returns
/// * `Ok(Board)` if the input describes a well-formed board.
/// * `Err(ParseError)` describing the first problem found otherwise.
///
/// # Examples
/// ```
/// use slider_solver::parser::parse_board;
///
/// let board = parse_board("3\n 0 1 3\n 4 2 5\n 7 8 6\n").unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.manhattan(), 4);
///
/// assert!(parse_board("2\n 1 2\n 3 3\n").is_err());
/// ```
pub fn parse_board(input: &str) -> Result<Board, ParseError> {
    let mut tokens = input.split_whitespace().enumerate();

    let (_, first) = tokens.next().ok_or(ParseError::Empty)?;
    let n = parse_number(first, 0)? as usize;
    if n < MIN_DIMENSION {
        return Err(ParseError::DimensionTooSmall {
            dimension: n,
            minimum: MIN_DIMENSION,
        });
    }

    let expected = n * n;
    let tiles = tokens
        .map(|(position, token)| parse_number(token, position))
        .collect::<Result<Vec<Tile>, _>>()?;
    if tiles.len() < expected {
        return Err(ParseError::MissingTiles {
            expected,
            found: tiles.len(),
        });
    }
    if tiles.len() > expected {
        return Err(ParseError::TrailingTokens {
            expected,
            found: tiles.len(),
        });
    }

    let max = (expected - 1) as Tile;
    let mut seen = vec![false; expected];
    for &tile in &tiles {
        if tile > max {
            return Err(ParseError::TileOutOfRange { tile, max });
        }
        if std::mem::replace(&mut seen[tile as usize], true) {
            return Err(ParseError::DuplicateTile { tile });
        }
    }

    debug!("parsed a {0}x{0} board", n);
    Ok(Board::from_tiles(n, tiles))
}

/// Reads and parses a board file.
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Board, ParseError> {
    let content = fs::read_to_string(path)?;
    parse_board(&content)
}

fn parse_number(token: &str, position: usize) -> Result<Tile, ParseError> {
    token.parse::<Tile>().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board_valid() {
        let board = parse_board("3\n 8  1  3\n 4  0  2\n 7  6  5\n").unwrap();
        assert_eq!(board, Board::from_rows(&[[8, 1, 3], [4, 0, 2], [7, 6, 5]]));
    }

    #[test]
    fn test_parse_board_ignores_layout() {
        let board = parse_board("2 1 2 3 0").unwrap();
        assert!(board.is_goal());
    }

    #[test]
    fn test_parse_board_display_roundtrip() {
        let board = Board::from_rows(&[[5, 1, 2, 3], [9, 6, 7, 4], [13, 10, 11, 8], [0, 14, 15, 12]]);
        assert_eq!(parse_board(&board.to_string()).unwrap(), board);
    }

    #[test]
    fn test_parse_board_empty_input() {
        assert!(matches!(parse_board("  \n"), Err(ParseError::Empty)));
    }

    #[test]
    fn test_parse_board_invalid_number() {
        let err = parse_board("2\n1 x\n3 0").unwrap_err();
        assert!(matches!(err, ParseError::InvalidNumber { ref token, position: 2 } if token == "x"));
        assert!(err.to_string().contains("'x'"));

        assert!(matches!(parse_board("2\n1 -2\n3 0"), Err(ParseError::InvalidNumber { .. })));
        assert!(matches!(parse_board("three"), Err(ParseError::InvalidNumber { position: 0, .. })));
    }

    #[test]
    fn test_parse_board_dimension_too_small() {
        assert!(matches!(
            parse_board("1\n0"),
            Err(ParseError::DimensionTooSmall { dimension: 1, minimum: 2 })
        ));
    }

    #[test]
    fn test_parse_board_tile_count() {
        assert!(matches!(
            parse_board("2\n1 2 3"),
            Err(ParseError::MissingTiles { expected: 4, found: 3 })
        ));
        assert!(matches!(
            parse_board("2\n1 2 3 0 4"),
            Err(ParseError::TrailingTokens { expected: 4, found: 5 })
        ));
    }

    #[test]
    fn test_parse_board_tile_range_and_duplicates() {
        assert!(matches!(
            parse_board("2\n1 2 4 0"),
            Err(ParseError::TileOutOfRange { tile: 4, max: 3 })
        ));
        // No blank: some other tile has to repeat.
        assert!(matches!(
            parse_board("2\n1 2 3 3"),
            Err(ParseError::DuplicateTile { tile: 3 })
        ));
    }

    #[test]
    fn test_read_board_missing_file() {
        let err = read_board("/nonexistent/puzzle.txt").unwrap_err();
        assert!(matches!(err, ParseError::Io(_)));
    }
}
