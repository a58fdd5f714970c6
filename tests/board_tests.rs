use heatseeker::{BoardError, Orientation, Outcome, Position, TargetBoard, SHIPS};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_manual_place_and_sink_reports_extent() {
    let mut board = TargetBoard::new();
    let destroyer = SHIPS[4];
    board
        .place(destroyer, Position::new(3, 4), Orientation::Vertical)
        .unwrap();

    assert_eq!(board.attack(Position::new(0, 0)), Outcome::Miss);
    assert_eq!(board.attack(Position::new(3, 4)), Outcome::hit("Destroyer"));
    assert_eq!(
        board.attack(Position::new(3, 5)),
        Outcome::sunk("Destroyer", vec![Position::new(3, 4), Position::new(3, 5)])
    );
    assert!(board.all_sunk());
    assert_eq!(board.shots_taken(), 3);
}

#[test]
fn test_repeat_and_out_of_range_attacks_are_unavailable() {
    let mut board = TargetBoard::new();
    board
        .place(SHIPS[0], Position::new(0, 0), Orientation::Horizontal)
        .unwrap();
    assert!(board.attack(Position::new(0, 0)).is_hit());
    assert_eq!(board.attack(Position::new(0, 0)), Outcome::Unavailable);
    assert_eq!(board.attack(Position::new(10, 0)), Outcome::Unavailable);
    assert_eq!(board.shots_taken(), 1);
}

#[test]
fn test_overlap_rejected() {
    let mut board = TargetBoard::new();
    board
        .place(SHIPS[0], Position::new(0, 2), Orientation::Horizontal)
        .unwrap();
    let err = board
        .place(SHIPS[1], Position::new(2, 0), Orientation::Vertical)
        .unwrap_err();
    assert_eq!(err, BoardError::ShipOverlaps);
}

#[test]
fn test_random_fleet_no_overlap() {
    let mut rng = SmallRng::seed_from_u64(42);
    let board = TargetBoard::random(&mut rng, &SHIPS).unwrap();
    let expected: usize = SHIPS.iter().map(|s| s.length()).sum();
    assert_eq!(board.ship_map().count_ones(), expected);
    assert_eq!(board.placements().count(), SHIPS.len());
    assert!(!board.all_sunk());
}

#[test]
fn test_position_chart_notation() {
    assert_eq!(Position::new(2, 6).to_string(), "C7");
    assert_eq!(Position::new(9, 9).to_string(), "J10");
    assert_eq!(Position::new(12, 0).to_string(), "(12, 0)");
}

#[test]
fn test_far_origin_is_out_of_bounds_not_a_panic() {
    let mut board = TargetBoard::new();
    for (origin, orientation) in [
        (Position::new(usize::MAX, 0), Orientation::Horizontal),
        (Position::new(0, usize::MAX), Orientation::Vertical),
        (Position::new(usize::MAX - 1, usize::MAX), Orientation::Horizontal),
    ] {
        let err = board.place(SHIPS[0], origin, orientation).unwrap_err();
        assert_eq!(err, BoardError::ShipOutOfBounds);
    }
    assert_eq!(board.placements().count(), 0);
}
