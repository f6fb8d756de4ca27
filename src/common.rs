//! Common types for Battleship: board errors and guess results.

use crate::bitboard::BitBoardError;

/// Result of resolving a guess against the fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess hit an unhit ship segment.
    Hit,
    /// Guess found no unhit ship segment (empty water or an already hit cell).
    Miss,
    /// Guess hit the last unhit segment of a ship, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    /// `true` for `Hit` and `Sink`.
    pub fn is_hit(&self) -> bool {
        !matches!(self, GuessResult::Miss)
    }

    /// Name of the ship sunk by this guess, if any.
    pub fn sunk(&self) -> Option<&'static str> {
        match self {
            GuessResult::Sink(name) => Some(name),
            _ => None,
        }
    }
}

/// Errors returned by board, placement, and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Named ship not found in the catalog.
    NameNotFound,
    /// Coordinate lies outside the board.
    InvalidCoordinate { row: usize, col: usize },
    /// Text could not be parsed as a coordinate.
    MalformedCoordinate,
    /// Ship would extend past the edge of the board.
    ShipOutOfBounds,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// No legal placement found within the attempt limit.
    UnableToPlaceShip,
    /// The round already finished; no further guesses are accepted.
    RoundOver,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::NameNotFound => write!(f, "Ship name not found in catalog"),
            BoardError::InvalidCoordinate { row, col } => {
                write!(f, "Coordinate out of range: row={}, col={}", row, col)
            }
            BoardError::MalformedCoordinate => write!(f, "Malformed coordinate"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::RoundOver => write!(f, "Round is already complete"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
