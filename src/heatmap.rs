//! Monte Carlo heatmap over the opponent board.
//!
//! Each turn the engine draws `simulation_count` random layouts of the
//! remaining fleet with [`PlacementSimulator`] and counts, per unknown cell,
//! how many successful layouts put a ship there. This is rejection sampling,
//! not an exact posterior: the more hits constrain the board, the fewer
//! draws survive and the noisier the counts become. An all-zero heatmap is
//! a normal result and callers are expected to fall back to random search.

use rand::Rng;

use crate::{
    common::Position,
    config::{CELL_COUNT, DEFAULT_SIMULATION_COUNT},
    fleet::FleetState,
    knowledge::KnowledgeGrid,
    simulator::PlacementSimulator,
};

/// Per-cell counts of simulated layouts covering that cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heatmap {
    counts: [u32; CELL_COUNT],
    samples: u32,
}

impl Default for Heatmap {
    fn default() -> Self {
        Self {
            counts: [0; CELL_COUNT],
            samples: 0,
        }
    }
}

impl Heatmap {
    pub fn get(&self, pos: Position) -> u32 {
        self.counts.get(pos.index()).copied().unwrap_or(0)
    }

    /// Number of simulations that produced a consistent layout.
    pub fn samples(&self) -> u32 {
        self.samples
    }

    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn is_cold(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Fraction of successful layouts that covered `pos`.
    pub fn frequency(&self, pos: Position) -> f64 {
        if self.samples == 0 {
            0.0
        } else {
            self.get(pos) as f64 / self.samples as f64
        }
    }

    /// `(position, count)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (Position::from_index(i), c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapEngine {
    simulator: PlacementSimulator,
    simulation_count: usize,
}

impl Default for HeatmapEngine {
    fn default() -> Self {
        Self::new(PlacementSimulator::default(), DEFAULT_SIMULATION_COUNT)
    }
}

impl HeatmapEngine {
    pub fn new(simulator: PlacementSimulator, simulation_count: usize) -> Self {
        Self {
            simulator,
            simulation_count,
        }
    }

    pub fn simulation_count(&self) -> usize {
        self.simulation_count
    }

    /// Run every simulation and tally occupied unknown cells.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        knowledge: &KnowledgeGrid,
        fleet: &FleetState,
        rng: &mut R,
    ) -> Heatmap {
        let mut heatmap = Heatmap::default();
        let unknown = knowledge.unknown();

        for _ in 0..self.simulation_count {
            let Some(world) = self.simulator.attempt(knowledge, fleet, rng) else {
                continue;
            };
            heatmap.samples += 1;
            for (row, col) in (world & unknown).iter_set_bits() {
                heatmap.counts[Position::from_row_col(row, col).index()] += 1;
            }
        }

        log::trace!(
            "heatmap: {}/{} simulations succeeded, peak {}",
            heatmap.samples,
            self.simulation_count,
            heatmap.max()
        );
        heatmap
    }
}
