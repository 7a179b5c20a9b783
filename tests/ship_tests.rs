use seabattle::{GameError, Orientation, Ship};

#[test]
fn test_new_rejects_bad_lengths() {
    assert_eq!(
        Ship::new(1, 0, 0, Orientation::Horizontal).unwrap_err(),
        GameError::InvalidShipLength(1)
    );
    assert_eq!(
        Ship::new(6, 0, 0, Orientation::Vertical).unwrap_err(),
        GameError::InvalidShipLength(6)
    );
    for len in 2..=5 {
        let ship = Ship::new(len, 0, 0, Orientation::Horizontal).unwrap();
        assert_eq!(ship.length(), len);
        assert_eq!(ship.hits(), 0);
        assert!(!ship.is_sunk());
    }
}

#[test]
fn test_cells_follow_orientation() -> Result<(), GameError> {
    let ship = Ship::new(3, 2, 2, Orientation::Horizontal)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(2, 2), (2, 3), (2, 4)]);

    let ship = Ship::new(4, 0, 7, Orientation::Vertical)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, vec![(0, 7), (1, 7), (2, 7), (3, 7)]);
    assert!(ship.contains(3, 7));
    assert!(!ship.contains(4, 7));
    assert!(!ship.contains(0, 8));
    Ok(())
}

#[test]
fn test_constructor_ignores_board_bounds() {
    // Off-board ships are legal values; the board refuses to place them.
    let ship = Ship::new(5, 9, 9, Orientation::Vertical).unwrap();
    assert_eq!(ship.origin(), (9, 9));
    assert_eq!(ship.orientation(), Orientation::Vertical);
}
