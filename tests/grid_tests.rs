use armada::{Grid, GridError};

#[test]
fn test_set_get_clear() -> Result<(), GridError> {
    let mut grid = Grid::new(5);
    assert!(grid.is_empty());
    assert!(!grid.get(2, 3)?);
    grid.set(2, 3)?;
    assert!(grid.get(2, 3)?);
    assert_eq!(grid.count_ones(), 1);
    grid.clear(2, 3)?;
    assert!(!grid.get(2, 3)?);
    assert!(grid.is_empty());
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let mut grid = Grid::new(4);
    assert_eq!(
        grid.get(4, 0).unwrap_err(),
        GridError::OutOfBounds { row: 4, col: 0 }
    );
    assert_eq!(
        grid.set(0, 4).unwrap_err(),
        GridError::OutOfBounds { row: 0, col: 4 }
    );
}

#[test]
fn test_spans_word_boundary() -> Result<(), GridError> {
    // 9x9 = 81 bits, more than one u64 word
    let mut grid = Grid::new(9);
    let cells = [(0, 0), (7, 3), (8, 8)];
    for &(r, c) in &cells {
        grid.set(r, c)?;
    }
    assert_eq!(grid.count_ones(), 3);
    let collected: Vec<_> = grid.iter_set_bits().collect();
    assert_eq!(collected, vec![(0, 0), (7, 3), (8, 8)]);
    Ok(())
}

#[test]
fn test_overlaps_and_union() -> Result<(), GridError> {
    let mut a = Grid::new(6);
    let mut b = Grid::new(6);
    a.set(1, 1)?;
    b.set(4, 4)?;
    assert!(!a.overlaps(&b));
    b.set(1, 1)?;
    assert!(a.overlaps(&b));

    let mut union = Grid::new(6);
    union.union_with(&a);
    union.union_with(&b);
    assert_eq!(union.count_ones(), 2);
    assert!(union.get(1, 1)?);
    assert!(union.get(4, 4)?);
    Ok(())
}
