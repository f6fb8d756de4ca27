//! Player-visible board marks. Holds no ship identity.

use core::fmt;

use crate::config::{BOARD_COLS, BOARD_ROWS};
use crate::coord::{Coordinate, RowLabel};

/// Display state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Blank,
    Hit,
    Miss,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Blank => '.',
            Cell::Hit => 'x',
            Cell::Miss => 'o',
        }
    }
}

/// Grid of display marks, one row per label.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    grid: [[Cell; BOARD_COLS]; BOARD_ROWS],
}

impl Board {
    /// Create a board with every cell blank.
    pub fn new() -> Self {
        Board {
            grid: [[Cell::Blank; BOARD_COLS]; BOARD_ROWS],
        }
    }

    /// Reset every cell to blank.
    pub fn initialize(&mut self) {
        self.grid = [[Cell::Blank; BOARD_COLS]; BOARD_ROWS];
    }

    pub fn cell(&self, coord: Coordinate) -> Cell {
        self.grid[coord.row().index()][coord.col()]
    }

    /// Mark `coord` as hit if it is still blank. Returns whether the mark changed.
    pub fn mark_hit(&mut self, coord: Coordinate) -> bool {
        self.mark(coord, Cell::Hit)
    }

    /// Mark `coord` as missed if it is still blank. Returns whether the mark changed.
    pub fn mark_miss(&mut self, coord: Coordinate) -> bool {
        self.mark(coord, Cell::Miss)
    }

    fn mark(&mut self, coord: Coordinate, mark: Cell) -> bool {
        let slot = &mut self.grid[coord.row().index()][coord.col()];
        if *slot != Cell::Blank {
            return false;
        }
        *slot = mark;
        true
    }

    /// Rows in label order.
    pub fn rows(&self) -> impl Iterator<Item = (RowLabel, &[Cell; BOARD_COLS])> + '_ {
        RowLabel::ALL.iter().copied().zip(self.grid.iter())
    }

    /// Number of cells currently showing `mark`.
    pub fn count(&self, mark: Cell) -> usize {
        self.grid.iter().flatten().filter(|&&c| c == mark).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders the column header followed by one labelled line per row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for c in 0..BOARD_COLS {
            write!(f, " {}", c)?;
        }
        writeln!(f)?;
        for (label, row) in self.rows() {
            write!(f, "{}", label)?;
            for cell in row.iter() {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
