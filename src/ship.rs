//! Ship definitions and per-cell hit tracking.

use alloc::vec::Vec;
use core::fmt;

use crate::common::BoardError;
use crate::config;
use crate::coord::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// Cells covered by a ship of `length` starting at `start`.
///
/// Fails with `ShipOutOfBounds` if any cell would fall off the board.
pub fn footprint(
    start: Coordinate,
    orientation: Orientation,
    length: usize,
) -> Result<Vec<Coordinate>, BoardError> {
    (0..length)
        .map(|i| {
            start
                .offset(orientation, i)
                .ok_or(BoardError::ShipOutOfBounds)
        })
        .collect()
}

/// A placed ship. Owns its cells and a hit flag per cell; never moves.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    cells: Vec<(Coordinate, bool)>,
}

impl Ship {
    /// Build a ship from the standard catalog by name.
    pub fn new(
        name: &str,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let ship_type = config::ship_type(name).ok_or(BoardError::NameNotFound)?;
        Self::from_type(ship_type, start, orientation)
    }

    /// Build a ship of an explicit type at `start`, every cell unhit.
    pub fn from_type(
        ship_type: ShipType,
        start: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        let cells = footprint(start, orientation, ship_type.length())?
            .into_iter()
            .map(|coord| (coord, false))
            .collect();
        Ok(Ship {
            ship_type,
            orientation,
            cells,
        })
    }

    /// Flag `coord` as hit. Returns `true` only when `coord` is one of this
    /// ship's cells and was not hit before; callers re-check `is_sunk`.
    pub fn register_hit(&mut self, coord: Coordinate) -> bool {
        match self.cells.iter_mut().find(|(c, _)| *c == coord) {
            Some((_, hit)) if !*hit => {
                *hit = true;
                true
            }
            _ => false,
        }
    }

    /// `true` if `coord` is a cell of this ship that has not been hit.
    pub fn has_unhit(&self, coord: Coordinate) -> bool {
        self.cells.iter().any(|&(c, hit)| c == coord && !hit)
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.cells.iter().all(|&(_, hit)| hit)
    }

    /// Number of segments hit so far.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|&&(_, hit)| hit).count()
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.iter().any(|&(c, _)| c == coord)
    }

    /// Occupied cells in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.cells.iter().map(|&(c, _)| c)
    }

    pub fn name(&self) -> &'static str {
        self.ship_type.name()
    }

    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship, or `None` for a zero-length type.
    pub fn origin(&self) -> Option<Coordinate> {
        self.cells.first().map(|&(c, _)| c)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {:?}, orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.origin(),
            self.orientation,
            self.hits(),
            self.cells.len(),
        )
    }
}
