//! Board addressing: row labels and validated coordinates.

use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::config::{BOARD_COLS, BOARD_ROWS};
use crate::ship::Orientation;

/// Row label of the board, ordered top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RowLabel {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
}

impl RowLabel {
    /// All labels in board order.
    pub const ALL: [RowLabel; BOARD_ROWS] = [
        RowLabel::A,
        RowLabel::B,
        RowLabel::C,
        RowLabel::D,
        RowLabel::E,
        RowLabel::F,
        RowLabel::G,
        RowLabel::H,
        RowLabel::I,
        RowLabel::J,
    ];

    /// Last label on the board.
    pub const MAX: RowLabel = RowLabel::J;

    /// Zero-based index of the label.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Label at `index`, if it lies on the board.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a label from a single character, ignoring case.
    pub fn from_char(ch: char) -> Option<Self> {
        let ch = ch.to_ascii_uppercase();
        Self::ALL.iter().copied().find(|label| label.as_char() == ch)
    }

    pub fn as_char(self) -> char {
        match self {
            RowLabel::A => 'A',
            RowLabel::B => 'B',
            RowLabel::C => 'C',
            RowLabel::D => 'D',
            RowLabel::E => 'E',
            RowLabel::F => 'F',
            RowLabel::G => 'G',
            RowLabel::H => 'H',
            RowLabel::I => 'I',
            RowLabel::J => 'J',
        }
    }
}

impl fmt::Display for RowLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A cell on the board. Always in bounds once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "RawCoordinate"))]
pub struct Coordinate {
    row: RowLabel,
    col: usize,
}

/// Unchecked wire form; deserialized coordinates go through `Coordinate::new`.
#[cfg(feature = "std")]
#[derive(serde::Deserialize)]
struct RawCoordinate {
    row: RowLabel,
    col: usize,
}

#[cfg(feature = "std")]
impl TryFrom<RawCoordinate> for Coordinate {
    type Error = BoardError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.row, raw.col)
    }
}

impl Coordinate {
    /// Create a coordinate, rejecting columns outside `[0, BOARD_COLS)`.
    pub fn new(row: RowLabel, col: usize) -> Result<Self, BoardError> {
        if col >= BOARD_COLS {
            return Err(BoardError::InvalidCoordinate {
                row: row.index(),
                col,
            });
        }
        Ok(Self { row, col })
    }

    /// Create a coordinate from zero-based row and column indices.
    pub fn from_indices(row: usize, col: usize) -> Result<Self, BoardError> {
        let label = RowLabel::from_index(row).ok_or(BoardError::InvalidCoordinate { row, col })?;
        Self::new(label, col)
    }

    pub fn row(&self) -> RowLabel {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// The cell `step` places further along `orientation`, if still on the board.
    pub fn offset(&self, orientation: Orientation, step: usize) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => {
                let col = self.col.checked_add(step)?;
                Self::new(self.row, col).ok()
            }
            Orientation::Vertical => {
                let row = RowLabel::from_index(self.row.index().checked_add(step)?)?;
                Some(Self { row, col: self.col })
            }
        }
    }

    /// Iterator over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        RowLabel::ALL
            .into_iter()
            .flat_map(|row| (0..BOARD_COLS).map(move |col| Coordinate { row, col }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.row, self.col)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    /// Parses `"B5"` style input: a row label followed by a column number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let row = chars
            .next()
            .and_then(RowLabel::from_char)
            .ok_or(BoardError::MalformedCoordinate)?;
        let col: usize = chars
            .as_str()
            .trim()
            .parse()
            .map_err(|_| BoardError::MalformedCoordinate)?;
        Self::new(row, col)
    }
}
