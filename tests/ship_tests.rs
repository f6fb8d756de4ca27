use battleship::{BoardError, Coordinate, Orientation, RowLabel, Ship, ShipType};

fn at(row: RowLabel, col: usize) -> Coordinate {
    Coordinate::new(row, col).unwrap()
}

#[test]
fn test_horizontal_cells() -> Result<(), BoardError> {
    let ship = Ship::new("cruiser", at(RowLabel::C, 2), Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![at(RowLabel::C, 2), at(RowLabel::C, 3), at(RowLabel::C, 4)]
    );
    assert_eq!(ship.origin(), Some(at(RowLabel::C, 2)));
    Ok(())
}

#[test]
fn test_vertical_cells() -> Result<(), BoardError> {
    let ship = Ship::new("battleship", at(RowLabel::A, 0), Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            at(RowLabel::A, 0),
            at(RowLabel::B, 0),
            at(RowLabel::C, 0),
            at(RowLabel::D, 0)
        ]
    );
    for c in cells {
        assert!(ship.contains(c));
    }
    assert!(!ship.contains(at(RowLabel::E, 0)));
    Ok(())
}

#[test]
fn test_unknown_name_is_an_error() {
    let err = Ship::new("rowboat", at(RowLabel::A, 0), Orientation::Vertical).unwrap_err();
    assert_eq!(err, BoardError::NameNotFound);
}

#[test]
fn test_off_board_is_an_error() {
    let err = Ship::new("carrier", at(RowLabel::A, 7), Orientation::Horizontal).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    let err = Ship::new("carrier", at(RowLabel::H, 0), Orientation::Vertical).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), BoardError> {
    let def = ShipType::new("Test", 2);
    let mut ship = Ship::from_type(def, at(RowLabel::B, 1), Orientation::Horizontal)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(at(RowLabel::B, 1)));
    assert!(!ship.is_sunk());
    // second hit on the same cell does not count
    assert!(!ship.register_hit(at(RowLabel::B, 1)));
    assert!(ship.register_hit(at(RowLabel::B, 2)));
    assert!(ship.is_sunk());
    // miss
    assert!(!ship.register_hit(at(RowLabel::A, 0)));
    assert!(ship.is_sunk());
    assert_eq!(ship.hits(), 2);
    Ok(())
}
