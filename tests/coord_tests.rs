use battleship::{BoardError, Coordinate, Orientation, RowLabel, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_row_labels_are_ordered() {
    for (i, label) in RowLabel::ALL.iter().enumerate() {
        assert_eq!(label.index(), i);
        assert_eq!(RowLabel::from_index(i), Some(*label));
    }
    assert_eq!(RowLabel::from_index(BOARD_ROWS), None);
    assert_eq!(RowLabel::MAX, RowLabel::J);
    assert_eq!(RowLabel::from_char('c'), Some(RowLabel::C));
    assert_eq!(RowLabel::from_char('K'), None);
}

#[test]
fn test_out_of_range_rejected() {
    assert_eq!(
        Coordinate::new(RowLabel::A, BOARD_COLS).unwrap_err(),
        BoardError::InvalidCoordinate { row: 0, col: BOARD_COLS }
    );
    assert!(Coordinate::from_indices(BOARD_ROWS, 0).is_err());
}

#[test]
fn test_parse() {
    let c: Coordinate = "B5".parse().unwrap();
    assert_eq!(c, Coordinate::new(RowLabel::B, 5).unwrap());
    assert_eq!(c.to_string(), "B5");
    assert_eq!(
        "Z1".parse::<Coordinate>().unwrap_err(),
        BoardError::MalformedCoordinate
    );
    assert_eq!(
        "A".parse::<Coordinate>().unwrap_err(),
        BoardError::MalformedCoordinate
    );
    assert!(matches!(
        "A12".parse::<Coordinate>(),
        Err(BoardError::InvalidCoordinate { .. })
    ));
}

#[test]
fn test_offset_stops_at_edge() {
    let c = Coordinate::new(RowLabel::I, 8).unwrap();
    assert_eq!(
        c.offset(Orientation::Vertical, 1),
        Some(Coordinate::new(RowLabel::J, 8).unwrap())
    );
    assert_eq!(c.offset(Orientation::Vertical, 2), None);
    assert_eq!(
        c.offset(Orientation::Horizontal, 1),
        Some(Coordinate::new(RowLabel::I, 9).unwrap())
    );
    assert_eq!(c.offset(Orientation::Horizontal, 2), None);
}

#[test]
fn test_all_covers_board() {
    assert_eq!(Coordinate::all().count(), BOARD_ROWS * BOARD_COLS);
}

#[test]
fn test_deserialize_checks_bounds() {
    let c: Coordinate = serde_json::from_str(r#"{"row":"B","col":5}"#).unwrap();
    assert_eq!(c, Coordinate::new(RowLabel::B, 5).unwrap());
    assert_eq!(serde_json::to_string(&c).unwrap(), r#"{"row":"B","col":5}"#);

    let err = serde_json::from_str::<Coordinate>(r#"{"row":"A","col":50}"#).unwrap_err();
    assert!(err.to_string().contains("out of range"));
}
