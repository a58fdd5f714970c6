use heatseeker::{
    AiOpponent, Attacker, GameEngine, GameStatus, Outcome, RandomAttacker, TargetBoard,
    TargetingConfig, TargetingError, CELL_COUNT, SHIPS, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_ai_sinks_random_fleet() {
    let mut rng = SmallRng::seed_from_u64(123);
    let mut board = TargetBoard::random(&mut rng, &SHIPS).unwrap();
    let mut ai = AiOpponent::new(SmallRng::seed_from_u64(456));

    let mut engine = GameEngine::new(&mut ai, &mut board);
    let report = engine.play_out().unwrap();
    assert_eq!(engine.status(), GameStatus::Won);
    assert_eq!(report.hits, TOTAL_SHIP_CELLS);
    assert_eq!(report.ships_sunk, SHIPS.len());
    assert_eq!(report.rejected, 0);
    assert!(report.shots <= CELL_COUNT);

    assert!(ai.fleet().is_empty());
    assert!(ai.knowledge().hits().is_empty());
    assert_eq!(ai.knowledge().sunk().count_ones(), TOTAL_SHIP_CELLS);
}

#[test]
fn test_random_attacker_also_finishes() {
    let mut rng = SmallRng::seed_from_u64(9);
    let mut board = TargetBoard::random(&mut rng, &SHIPS).unwrap();
    let mut attacker = RandomAttacker::new(SmallRng::seed_from_u64(10));
    let report = GameEngine::new(&mut attacker, &mut board).play_out().unwrap();
    assert_eq!(report.hits, TOTAL_SHIP_CELLS);
    assert!(report.shots >= TOTAL_SHIP_CELLS && report.shots <= CELL_COUNT);
}

#[test]
fn test_ai_reused_across_games_after_reset() {
    let config = TargetingConfig {
        simulation_count: 100,
        ..TargetingConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(31);
    let mut ai: Box<dyn Attacker> =
        Box::new(AiOpponent::with_config(SmallRng::seed_from_u64(32), &SHIPS, config));
    for _ in 0..2 {
        ai.reset();
        let mut board = TargetBoard::random(&mut rng, &SHIPS).unwrap();
        let report = GameEngine::new(ai.as_mut(), &mut board).play_out().unwrap();
        assert_eq!(report.ships_sunk, SHIPS.len());
    }
}

#[test]
fn test_step_reports_outcomes() {
    let mut board = TargetBoard::new();
    let mut attacker = RandomAttacker::new(SmallRng::seed_from_u64(1));
    let mut engine = GameEngine::new(&mut attacker, &mut board);
    // an empty board is already won, but stepping still resolves shots
    assert_eq!(engine.status(), GameStatus::Won);
    for _ in 0..CELL_COUNT {
        assert_eq!(engine.step().unwrap(), Outcome::Miss);
    }
    assert_eq!(engine.step().unwrap_err(), TargetingError::Exhausted);
    assert_eq!(engine.report().shots, CELL_COUNT);
}
