use heatseeker::{FleetState, ShipSpec, SHIPS};

#[test]
fn test_remove_by_name_once() {
    let mut fleet = FleetState::new(&SHIPS);
    assert_eq!(fleet.len(), 5);

    assert!(fleet.remove_by_name("Cruiser"));
    assert!(!fleet.remaining().iter().any(|s| s.name() == "Cruiser"));
    assert!(fleet.remaining().iter().any(|s| s.name() == "Submarine"));
    assert_eq!(fleet.len(), 4);

    assert!(!fleet.remove_by_name("Cruiser"));
    assert!(!fleet.remove_by_name("Dreadnought"));
    assert_eq!(fleet.len(), 4);
}

#[test]
fn test_duplicate_names_removed_one_at_a_time() {
    let manifest = [ShipSpec::new("Patrol", 2), ShipSpec::new("Patrol", 2)];
    let mut fleet = FleetState::new(&manifest);
    assert!(fleet.remove_by_name("Patrol"));
    assert_eq!(fleet.len(), 1);
    assert!(fleet.remove_by_name("Patrol"));
    assert!(fleet.is_empty());
}

#[test]
fn test_reset_restores_manifest() {
    let mut fleet = FleetState::new(&SHIPS);
    fleet.remove_by_name("Carrier");
    fleet.remove_by_name("Destroyer");
    fleet.reset(&SHIPS);
    assert_eq!(fleet.remaining(), &SHIPS[..]);
}
