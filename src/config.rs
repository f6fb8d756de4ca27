use crate::ship::ShipType;

pub const BOARD_ROWS: usize = 10;
pub const BOARD_COLS: usize = 10;

/// Default miss budget for a round.
pub const MAX_MISSES: usize = 20;

/// Rejected start samples tolerated for a single ship before fleet placement
/// gives up with `BoardError::UnableToPlaceShip`.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1_000;

pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipType; NUM_SHIPS] = [
    ShipType::new("carrier", 5),
    ShipType::new("battleship", 4),
    ShipType::new("cruiser", 3),
    ShipType::new("submarine", 3),
    ShipType::new("destroyer", 2),
];

/// Total number of ship segments in the standard catalog.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Look up a ship type by name in the standard catalog.
pub fn ship_type(name: &str) -> Option<ShipType> {
    catalog_lookup(&SHIPS, name)
}

/// Look up a ship type by name in an arbitrary catalog.
pub fn catalog_lookup(catalog: &[ShipType], name: &str) -> Option<ShipType> {
    catalog.iter().copied().find(|def| def.name() == name)
}
