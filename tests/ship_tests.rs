use armada::{Grid, Orientation, PlaceError, Ship};

#[test]
fn test_new_and_cells() -> Result<(), PlaceError> {
    let ship = Ship::new(5, (2, 1), 3, Orientation::Horizontal)?;
    assert_eq!(ship.cells(), &[(2, 1), (2, 2), (2, 3)]);
    assert_eq!(ship.origin(), (2, 1));
    assert_eq!(ship.length(), 3);
    assert_eq!(ship.orientation(), Orientation::Horizontal);
    for &(r, c) in ship.cells() {
        assert!(ship.contains(r, c));
    }
    assert!(!ship.contains(2, 4));
    Ok(())
}

#[test]
fn test_vertical_run() -> Result<(), PlaceError> {
    let ship = Ship::new(4, (0, 3), 3, Orientation::Vertical)?;
    assert_eq!(ship.cells(), &[(0, 3), (1, 3), (2, 3)]);
    Ok(())
}

#[test]
fn test_run_out_of_bounds() {
    // col 3 + length 3 > 5
    assert_eq!(
        Ship::new(5, (0, 3), 3, Orientation::Horizontal).unwrap_err(),
        PlaceError::OutOfBounds
    );
    assert_eq!(
        Ship::new(5, (4, 0), 2, Orientation::Vertical).unwrap_err(),
        PlaceError::OutOfBounds
    );
    assert_eq!(
        Ship::new(5, (5, 0), 1, Orientation::Horizontal).unwrap_err(),
        PlaceError::OutOfBounds
    );
    assert_eq!(
        Ship::new(5, (0, 0), 0, Orientation::Horizontal).unwrap_err(),
        PlaceError::OutOfBounds
    );
}

#[test]
fn test_orientation_tokens() {
    assert_eq!("H".parse::<Orientation>().unwrap(), Orientation::Horizontal);
    assert_eq!("v".parse::<Orientation>().unwrap(), Orientation::Vertical);
    assert_eq!(
        "D".parse::<Orientation>().unwrap_err(),
        PlaceError::InvalidOrientation
    );
}

#[test]
fn test_sunk_is_derived_from_fired_mask() -> Result<(), PlaceError> {
    let ship = Ship::new(4, (1, 1), 2, Orientation::Horizontal)?;
    let mut fired = Grid::new(4);
    assert!(!ship.is_sunk(&fired));
    fired.set(1, 1).unwrap();
    assert!(!ship.is_sunk(&fired));
    fired.set(1, 2).unwrap();
    assert!(ship.is_sunk(&fired));
    Ok(())
}
