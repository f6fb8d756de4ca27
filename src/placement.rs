//! Random, non-overlapping fleet placement.
//!
//! Start cells are drawn uniformly over the board and each one is offered
//! to [`find_placement`], which tries vertical before horizontal. Rejected
//! starts are simply resampled.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::BoardError;
use crate::config::{BOARD_COLS, BOARD_ROWS, MAX_PLACEMENT_ATTEMPTS};
use crate::coord::{Coordinate, RowLabel};
use crate::ship::{footprint, Orientation, Ship, ShipType};

const _: () = assert!(BOARD_ROWS == BOARD_COLS, "occupancy bitboard is square");

/// Cells claimed by the fleet so far.
pub type Occupancy = BitBoard<u128, BOARD_ROWS>;

/// Occupancy of every cell owned by `ships`.
pub fn occupancy(ships: &[Ship]) -> Result<Occupancy, BoardError> {
    let mut taken = Occupancy::new();
    for ship in ships {
        taken |= Occupancy::from_coords(ship.cells())?;
    }
    Ok(taken)
}

/// Whether a ship of `size` starting at `start` stays inside the placement
/// bounds. A vertical ship may not reach the last row label.
pub fn in_bounds(start: Coordinate, size: usize, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Vertical => start
            .row()
            .index()
            .checked_add(size)
            .is_some_and(|end| end <= RowLabel::MAX.index()),
        Orientation::Horizontal => start
            .col()
            .checked_add(size)
            .is_some_and(|end| end <= BOARD_COLS),
    }
}

fn fits(
    start: Coordinate,
    size: usize,
    orientation: Orientation,
    taken: &Occupancy,
) -> Result<bool, BoardError> {
    if !in_bounds(start, size, orientation) {
        return Ok(false);
    }
    let candidate = Occupancy::from_coords(footprint(start, orientation, size)?)?;
    Ok((candidate & *taken).is_empty())
}

fn find_in(
    start: Coordinate,
    size: usize,
    taken: &Occupancy,
) -> Result<Option<Orientation>, BoardError> {
    for orientation in [Orientation::Vertical, Orientation::Horizontal] {
        if fits(start, size, orientation, taken)? {
            return Ok(Some(orientation));
        }
    }
    Ok(None)
}

/// Orientation at which a ship of `size` can start at `start` without
/// leaving the board or touching `existing`. Vertical wins ties.
///
/// `Ok(None)` means this start cell has no legal placement.
pub fn find_placement(
    start: Coordinate,
    size: usize,
    existing: &[Ship],
) -> Result<Option<Orientation>, BoardError> {
    find_in(start, size, &occupancy(existing)?)
}

/// Uniformly random cell on the board.
pub fn random_coordinate<R: Rng>(rng: &mut R) -> Result<Coordinate, BoardError> {
    let row = rng.random_range(0..BOARD_ROWS);
    let col = rng.random_range(0..BOARD_COLS);
    Coordinate::from_indices(row, col)
}

/// Place one ship of every type in `catalog`, in catalog order.
pub fn place_fleet<R: Rng>(rng: &mut R, catalog: &[ShipType]) -> Result<Vec<Ship>, BoardError> {
    let mut fleet = Vec::with_capacity(catalog.len());
    let mut taken = Occupancy::new();
    for &def in catalog {
        let ship = place_one(rng, def, &taken)?;
        taken |= Occupancy::from_coords(ship.cells())?;
        fleet.push(ship);
    }
    Ok(fleet)
}

fn place_one<R: Rng>(rng: &mut R, def: ShipType, taken: &Occupancy) -> Result<Ship, BoardError> {
    for attempt in 1..=MAX_PLACEMENT_ATTEMPTS {
        let start = random_coordinate(rng)?;
        if let Some(orientation) = find_in(start, def.length(), taken)? {
            log::debug!(
                "placed {} at {} {:?} after {} attempt(s)",
                def.name(),
                start,
                orientation,
                attempt
            );
            return Ship::from_type(def, start, orientation);
        }
    }
    log::warn!(
        "no placement for {} after {} attempts",
        def.name(),
        MAX_PLACEMENT_ATTEMPTS
    );
    Err(BoardError::UnableToPlaceShip)
}

