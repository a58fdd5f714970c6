use heatseeker::{BoardError, Orientation, Placement, Position, ShipSpec};

#[test]
fn test_horizontal_mask_and_cells() -> Result<(), BoardError> {
    const N: usize = 5;
    let spec = ShipSpec::new("Test", 3);
    let ship = Placement::<u32, N>::new(spec, Orientation::Horizontal, Position::new(1, 2))?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
    );
    for c in 1..4 {
        assert!(ship.mask().get(2, c)?);
    }
    assert_eq!(ship.mask().count_ones(), 3);
    Ok(())
}

#[test]
fn test_vertical_contains() -> Result<(), BoardError> {
    const N: usize = 5;
    let spec = ShipSpec::new("Test", 4);
    let ship = Placement::<u32, N>::new(spec, Orientation::Vertical, Position::new(0, 0))?;
    for y in 0..4 {
        assert!(ship.contains(Position::new(0, y)));
    }
    assert!(!ship.contains(Position::new(0, 4)));
    assert!(!ship.contains(Position::new(1, 0)));
    Ok(())
}

#[test]
fn test_out_of_bounds_rejected() {
    const N: usize = 5;
    let spec = ShipSpec::new("Test", 3);
    let err = Placement::<u32, N>::new(spec, Orientation::Horizontal, Position::new(3, 0)).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    let err = Placement::<u32, N>::new(spec, Orientation::Vertical, Position::new(0, 3)).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
    let err = Placement::<u32, N>::new(spec, Orientation::Vertical, Position::new(5, 0)).unwrap_err();
    assert_eq!(err, BoardError::ShipOutOfBounds);
}

#[test]
fn test_origin_near_usize_max_rejected() {
    const N: usize = 5;
    let spec = ShipSpec::new("Test", 2);
    for orientation in [Orientation::Horizontal, Orientation::Vertical] {
        let err = Placement::<u32, N>::new(spec, orientation, Position::new(usize::MAX, usize::MAX))
            .unwrap_err();
        assert_eq!(err, BoardError::ShipOutOfBounds);
    }
}

#[test]
fn test_placement_remembers_origin_and_orientation() -> Result<(), BoardError> {
    const N: usize = 5;
    let spec = ShipSpec::new("Test", 2);
    let ship = Placement::<u32, N>::new(spec, Orientation::Vertical, Position::new(4, 1))?;
    assert_eq!(ship.origin(), Position::new(4, 1));
    assert_eq!(ship.orientation(), Orientation::Vertical);
    assert_eq!(ship.spec(), spec);
    assert_eq!(
        format!("{:?}", ship),
        "Placement { name: \"Test\", origin: E2, orientation: Vertical }"
    );
    Ok(())
}
