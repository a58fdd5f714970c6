use heatseeker::{BitBoard, BitBoardError};

#[test]
fn test_try_new_sizes() {
    let ok = BitBoard::<u128, 10>::try_new();
    assert!(ok.is_ok());

    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { .. })));
}

#[test]
fn test_get_set_clear() {
    let mut bb = BitBoard::<u16, 4>::new();
    assert!(bb.is_empty());

    bb.set(1, 1).unwrap();
    assert!(bb.get(1, 1).unwrap());

    bb.clear(1, 1).unwrap();
    assert!(!bb.get(1, 1).unwrap());

    assert_eq!(
        bb.set(4, 0).unwrap_err(),
        BitBoardError::IndexOutOfBounds { row: 4, col: 0 }
    );
}

#[test]
fn test_full_and_complement_stay_in_bounds() {
    let full = BitBoard::<u128, 10>::full();
    assert_eq!(full.count_ones(), 100);
    assert!((!full).is_empty());

    let empty = BitBoard::<u128, 10>::new();
    assert_eq!((!empty).count_ones(), 100);
}

#[test]
fn test_covers_and_intersects() {
    let big = BitBoard::<u16, 4>::from_cells([(0, 0), (0, 1), (2, 2)]).unwrap();
    let small = BitBoard::<u16, 4>::from_cells([(0, 1), (2, 2)]).unwrap();
    let other = BitBoard::<u16, 4>::from_cells([(3, 3)]).unwrap();

    assert!(big.covers(&small));
    assert!(!small.covers(&big));
    assert!(big.covers(&BitBoard::new()));
    assert!(big.intersects(&small));
    assert!(!big.intersects(&other));
}

#[test]
fn test_iteration_order_and_nth() {
    let bb = BitBoard::<u16, 4>::from_cells([(3, 3), (0, 1), (1, 0)]).unwrap();
    let bits: Vec<_> = bb.iter_set_bits().collect();
    assert_eq!(bits, vec![(0, 1), (1, 0), (3, 3)]);
    assert_eq!(bb.nth_set_bit(2), Some((3, 3)));
    assert_eq!(bb.nth_set_bit(3), None);
}
