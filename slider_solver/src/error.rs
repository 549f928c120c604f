//! Error types returned by the library.

use std::fmt;
use std::io;

/// Errors raised when a solver cannot be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// No initial board was supplied.
    MissingBoard,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::MissingBoard => write!(f, "cannot build a solver without an initial board"),
        }
    }
}

impl std::error::Error for SolverError {}

/// Errors raised while reading a board in the text format.
#[derive(Debug)]
pub enum ParseError {
    /// The input holds no tokens at all.
    Empty,
    /// A token is not a non-negative integer.
    InvalidNumber { token: String, position: usize },
    /// The declared dimension is smaller than the supported minimum.
    DimensionTooSmall { dimension: usize, minimum: usize },
    /// Fewer tiles than `n * n` follow the dimension.
    MissingTiles { expected: usize, found: usize },
    /// More tokens follow the `n * n` tiles.
    TrailingTokens { expected: usize, found: usize },
    /// A tile value lies outside `0..n * n`.
    TileOutOfRange { tile: u32, max: u32 },
    /// A tile value appears more than once.
    DuplicateTile { tile: u32 },
    /// The board file could not be read.
    Io(io::Error),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "board input is empty"),
            ParseError::InvalidNumber { token, position } => {
                write!(f, "token {} ('{}') is not a valid number", position, token)
            }
            ParseError::DimensionTooSmall { dimension, minimum } => write!(
                f,
                "board dimension {} is too small (minimum {})",
                dimension, minimum
            ),
            ParseError::MissingTiles { expected, found } => {
                write!(f, "expected {} tiles, found {}", expected, found)
            }
            ParseError::TrailingTokens { expected, found } => write!(
                f,
                "expected {} tiles, found {} tokens after the dimension",
                expected, found
            ),
            ParseError::TileOutOfRange { tile, max } => {
                write!(f, "tile {} is out of range (0..={})", tile, max)
            }
            ParseError::DuplicateTile { tile } => write!(f, "tile {} appears more than once", tile),
            ParseError::Io(err) => write!(f, "failed to read board: {}", err),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(err: io::Error) -> Self {
        ParseError::Io(err)
    }
}
