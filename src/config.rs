use crate::ship::ShipSpec;

pub const BOARD_SIZE: u8 = 10;
pub const CELL_COUNT: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;
pub const NUM_SHIPS: usize = 5;
pub const SHIPS: [ShipSpec; NUM_SHIPS] = [
    ShipSpec::new("Carrier", 5),
    ShipSpec::new("Battleship", 4),
    ShipSpec::new("Cruiser", 3),
    ShipSpec::new("Submarine", 3),
    ShipSpec::new("Destroyer", 2),
];

/// Total number of ship segments used in the standard configuration.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;

/// Simulated worlds per targeting decision.
pub const DEFAULT_SIMULATION_COUNT: usize = 300;

/// Random placements tried per ship before a simulation gives up.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 50;

/// Runtime knobs for the heatmap targeting engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetingConfig {
    pub simulation_count: usize,
    pub placement_attempts: usize,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            simulation_count: DEFAULT_SIMULATION_COUNT,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
        }
    }
}

