use battlegrid::{Board, CannotPlaceReason, Location, LocationRange, RangeError, Ship};

fn loc(code: &str) -> Location {
    code.parse().unwrap()
}

fn range(start: &str, end: &str) -> LocationRange {
    LocationRange::new(start, end).unwrap()
}

#[test]
fn test_fresh_board_display() {
    let board = Board::new(4);
    assert_eq!(
        board.display(),
        "===========\n. 1 2 3 4\nA\nB\nC\nD\n==========="
    );
    assert_eq!(board.to_string(), board.display());
}

#[test]
fn test_hit_miss_sink_scenario() {
    let mut board = Board::new(4);
    board.place(Ship::cruiser(), &range("A1", "A3")).unwrap();

    assert_eq!(board.attack("A2"), "Hit. Cruiser.");
    assert_eq!(board.attack("B1"), "Miss!");
    assert_eq!(board.attack("A3"), "Hit. Cruiser.");
    assert_eq!(board.attack("A1"), "Sunk Cruiser of length 3!");

    assert_eq!(
        board.display(),
        "===========\n. 1 2 3 4\nA H H H\nB M\nC\nD\n==========="
    );
    assert!(board.all_sunk());
}

#[test]
fn test_invalid_attack_records_nothing() {
    let mut board = Board::new(4);
    let before = board.display();
    assert_eq!(
        board.attack("E1"),
        "Invalid Location E1. Please select another location."
    );
    assert_eq!(
        board.attack("A0"),
        "Invalid Location A0. Please select another location."
    );
    assert_eq!(
        board.attack("zz"),
        "Invalid Location zz. Please select another location."
    );
    assert_eq!(board.display(), before);
}

#[test]
fn test_ship_placement_invalid_location_range() {
    assert!(matches!(
        LocationRange::new("A4", "A1"),
        Err(RangeError::NotBefore { .. })
    ));
    assert!(matches!(
        LocationRange::new("A1", "C4"),
        Err(RangeError::Diagonal { .. })
    ));
}

#[test]
fn test_range_too_large_for_board() {
    let mut board = Board::new(4);
    let long = range("A1", "A17");
    assert_eq!(long.len(), 17);
    assert!(!long.is_valid_for(&board, &Ship::cruiser()));

    // Both checks fail; the board size is reported.
    let err = board.place(Ship::cruiser(), &long).unwrap_err();
    assert_eq!(
        err.reason(),
        CannotPlaceReason::TooLargeForBoard {
            length: 17,
            width: 4
        }
    );
}

#[test]
fn test_oversized_column_code_is_rejected() {
    assert!(matches!(
        LocationRange::new("A1", "A4000000000"),
        Err(RangeError::TooLong { .. })
    ));
    assert!(matches!(
        LocationRange::new("A4294967295", "B4294967295"),
        Ok(ref r) if r.len() == 2
    ));
}

#[test]
fn test_range_length_must_match_ship() {
    let mut board = Board::new(4);
    let short = range("B1", "B2");
    assert_eq!(
        short.validate_for(&board, &Ship::cruiser()),
        Err(CannotPlaceReason::LengthMismatch { range: 2, ship: 3 })
    );
    let err = board.place(Ship::cruiser(), &short).unwrap_err();
    assert_eq!(err.ship().kind(), "Cruiser");
    assert!(!board.is_occupied(&loc("B1")));
    assert!(board.place(Ship::destroyer(), &short).is_ok());
}

#[test]
fn test_overlapping_placement_leaves_board_unchanged() {
    let mut board = Board::new(4);
    board.place(Ship::cruiser(), &range("A1", "A3")).unwrap();
    for code in &["A1", "A2", "A3"] {
        assert!(board.is_occupied(&loc(code)));
    }

    let err = board
        .place(Ship::submarine(), &range("A3", "C3"))
        .unwrap_err();
    assert_eq!(err.reason(), CannotPlaceReason::AlreadyOccupied(loc("A3")));
    assert!(!board.is_occupied(&loc("B3")));
    assert!(!board.is_occupied(&loc("C3")));
    assert_eq!(board.occupant(&loc("A3")).map(|s| s.kind()), Some("Cruiser"));
    assert_eq!(board.iter_ships().count(), 1);

    // The returned ship can be placed elsewhere.
    board.place(err.into_ship(), &range("B4", "D4")).unwrap();
    assert_eq!(board.occupant(&loc("C4")).map(|s| s.kind()), Some("Submarine"));
}

#[test]
fn test_is_occupied_off_board_is_false() {
    let board = Board::new(4);
    assert!(!board.is_occupied(&loc("Z9")));
    assert!(board.occupant(&loc("Z9")).is_none());
    assert!(board.cell(loc("Z9")).is_none());
}

#[test]
fn test_repeated_attacks_are_not_rejected() {
    let mut board = Board::new(4);
    let key = board
        .place(Ship::destroyer(), &range("C2", "D2"))
        .unwrap();

    assert_eq!(board.attack("C2"), "Hit. Destroyer.");
    assert_eq!(board.attack("C2"), "Sunk Destroyer of length 2!");
    assert_eq!(board.ship(key).map(|s| s.strength()), Some(0));

    // Strength stays at zero once sunk.
    assert_eq!(board.attack("C2"), "Sunk Destroyer of length 2!");
    assert_eq!(board.ship(key).map(|s| s.strength()), Some(0));
    assert_eq!(board.shot_at(&loc("D2")), None);
}

#[test]
fn test_column_ship_display() {
    let mut board = Board::new(8);
    board.place(Ship::battleship(), &range("B2", "E2")).unwrap();
    for code in &["B2", "C2", "D2", "E2"] {
        board.attack(code);
    }
    board.attack("H8");
    let display = board.display();
    let lines: Vec<&str> = display.lines().collect();
    assert_eq!(lines[0].len(), 19);
    assert_eq!(lines[1], ". 1 2 3 4 5 6 7 8");
    assert_eq!(lines[2], "A");
    assert_eq!(lines[3], "B  H");
    assert_eq!(lines[6], "E  H");
    assert_eq!(lines[9], format!("H{}M", " ".repeat(8)));
    assert!(board.all_sunk());
}
