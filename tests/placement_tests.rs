use battleship::placement::{in_bounds, occupancy};
use battleship::{
    find_placement, place_fleet, BoardError, Coordinate, Orientation, RowLabel, Ship, ShipType,
    BOARD_COLS, SHIPS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn at(row: RowLabel, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn vertical_preferred_when_both_fit() {
    assert_eq!(
        find_placement(at(RowLabel::A, 0), 3, &[]).unwrap(),
        Some(Orientation::Vertical)
    );
}

#[test]
fn vertical_cannot_reach_last_row() {
    // F + 5 would cover F..J, which the vertical bound rejects.
    assert!(!in_bounds(at(RowLabel::F, 0), 5, Orientation::Vertical));
    assert!(in_bounds(at(RowLabel::E, 0), 5, Orientation::Vertical));
    assert_eq!(
        find_placement(at(RowLabel::F, 0), 5, &[]).unwrap(),
        Some(Orientation::Horizontal)
    );
}

#[test]
fn horizontal_fallback_on_vertical_overlap() {
    let blocker = Ship::new("destroyer", at(RowLabel::B, 0), Orientation::Horizontal).unwrap();
    let existing = [blocker];
    assert_eq!(
        find_placement(at(RowLabel::A, 2), 3, &existing).unwrap(),
        Some(Orientation::Vertical)
    );
    assert_eq!(
        find_placement(at(RowLabel::A, 0), 3, &existing).unwrap(),
        Some(Orientation::Horizontal)
    );
}

#[test]
fn no_placement_in_corner() {
    assert_eq!(find_placement(at(RowLabel::J, 9), 2, &[]).unwrap(), None);
}

#[test]
fn no_placement_when_both_orientations_overlap() {
    let existing = [
        Ship::new("carrier", at(RowLabel::A, 0), Orientation::Horizontal).unwrap(),
        Ship::new("battleship", at(RowLabel::B, 0), Orientation::Vertical).unwrap(),
    ];
    assert_eq!(
        find_placement(at(RowLabel::B, 0), 2, &existing).unwrap(),
        None
    );
}

#[test]
fn standard_fleet_in_catalog_order() {
    let mut rng = SmallRng::seed_from_u64(42);
    let fleet = place_fleet(&mut rng, &SHIPS).unwrap();
    let names: Vec<_> = fleet.iter().map(Ship::name).collect();
    assert_eq!(
        names,
        vec!["carrier", "battleship", "cruiser", "submarine", "destroyer"]
    );
    for (ship, def) in fleet.iter().zip(SHIPS.iter()) {
        assert_eq!(ship.cells().count(), def.length());
    }
}

#[test]
fn same_seed_same_fleet() {
    let mut rng1 = SmallRng::seed_from_u64(1234);
    let mut rng2 = SmallRng::seed_from_u64(1234);
    let fleet1 = place_fleet(&mut rng1, &SHIPS).unwrap();
    let fleet2 = place_fleet(&mut rng2, &SHIPS).unwrap();
    assert_eq!(fleet1, fleet2);
}

#[test]
fn unplaceable_catalog_gives_up() {
    let mut rng = SmallRng::seed_from_u64(7);
    let catalog = [ShipType::new("leviathan", BOARD_COLS + 1)];
    assert_eq!(
        place_fleet(&mut rng, &catalog).unwrap_err(),
        BoardError::UnableToPlaceShip
    );
}

#[test]
fn huge_ship_does_not_overflow_bounds() {
    let start = at(RowLabel::J, 9);
    assert!(!in_bounds(start, usize::MAX, Orientation::Vertical));
    assert!(!in_bounds(start, usize::MAX, Orientation::Horizontal));
    assert_eq!(find_placement(start, usize::MAX, &[]).unwrap(), None);

    let mut rng = SmallRng::seed_from_u64(7);
    let catalog = [ShipType::new("leviathan", usize::MAX)];
    assert_eq!(
        place_fleet(&mut rng, &catalog).unwrap_err(),
        BoardError::UnableToPlaceShip
    );
}

#[test]
fn occupancy_covers_every_ship_cell() {
    let fleet = [
        Ship::new("carrier", at(RowLabel::A, 0), Orientation::Horizontal).unwrap(),
        Ship::new("destroyer", at(RowLabel::I, 9), Orientation::Vertical).unwrap(),
    ];
    let taken = occupancy(&fleet).unwrap();
    assert_eq!(taken.count_ones(), 7);
    assert!(taken.get(0, 4).unwrap());
    assert!(taken.get(9, 9).unwrap());
    assert!(!taken.get(5, 5).unwrap());
}
