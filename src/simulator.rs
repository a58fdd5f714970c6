// Random "possible worlds" consistent with what has been observed.

use rand::Rng;

use crate::{
    bitboard::BitBoard,
    common::Position,
    config::{BOARD_SIZE, DEFAULT_PLACEMENT_ATTEMPTS},
    fleet::FleetState,
    knowledge::KnowledgeGrid,
    ship::{Orientation, Placement, ShipSpec},
};

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// Cells occupied by one simulated fleet layout.
pub type OccupancyGrid = BitBoard<u128, GRID_SIZE>;

/// Places the remaining fleet at random, rejecting layouts that contradict
/// known misses or leave a known hit uncovered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementSimulator {
    max_attempts: usize,
}

impl Default for PlacementSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEMENT_ATTEMPTS)
    }
}

impl PlacementSimulator {
    /// `max_attempts` random placements are tried per ship before the whole
    /// attempt is abandoned.
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// One simulated layout of `fleet`, or `None` if this draw failed.
    /// Failure is routine in constrained positions and carries no state.
    pub fn attempt<R: Rng + ?Sized>(
        &self,
        knowledge: &KnowledgeGrid,
        fleet: &FleetState,
        rng: &mut R,
    ) -> Option<OccupancyGrid> {
        let misses = knowledge.misses();
        let mut occupied = OccupancyGrid::new();

        for &spec in fleet.remaining() {
            let mask = self.place_one(spec, &occupied, &misses, rng)?;
            occupied |= mask;
        }

        // every unresolved hit must belong to some simulated ship
        if !occupied.covers(&knowledge.hits()) {
            return None;
        }
        Some(occupied)
    }

    fn place_one<R: Rng + ?Sized>(
        &self,
        spec: ShipSpec,
        occupied: &OccupancyGrid,
        misses: &OccupancyGrid,
        rng: &mut R,
    ) -> Option<OccupancyGrid> {
        for _ in 0..self.max_attempts {
            let orientation = Orientation::random(rng);
            let origin = Position::new(rng.random_range(0..GRID_SIZE), rng.random_range(0..GRID_SIZE));
            let Ok(placement) = Placement::<u128, GRID_SIZE>::new(spec, orientation, origin) else {
                continue;
            };
            let mask = placement.mask();
            if mask.intersects(occupied) || mask.intersects(misses) {
                continue;
            }
            return Some(mask);
        }
        None
    }
}
