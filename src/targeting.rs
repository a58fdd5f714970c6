//! Turning beliefs into the next shot, and shot outcomes into beliefs.

use rand::Rng;

use crate::{
    bitboard::BitBoard,
    common::{HitReport, Outcome, Position, TargetingError},
    config::{TargetingConfig, BOARD_SIZE},
    fleet::FleetState,
    heatmap::{Heatmap, HeatmapEngine},
    knowledge::{Belief, KnowledgeGrid},
    simulator::PlacementSimulator,
};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Cells this attacker has not chosen yet. A cell leaves the pool once and
/// never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UntriedPool {
    cells: BB,
}

impl Default for UntriedPool {
    fn default() -> Self {
        Self { cells: BB::full() }
    }
}

impl UntriedPool {
    /// A pool holding every cell of the board.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.cells = BB::full();
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.get(pos.y, pos.x).unwrap_or(false)
    }

    /// Take `pos` out of the pool; `false` if it was not there.
    pub fn remove(&mut self, pos: Position) -> bool {
        if !self.contains(pos) {
            return false;
        }
        self.cells.clear(pos.y, pos.x).is_ok()
    }

    /// Remove and return a uniformly random untried cell.
    pub fn take_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Position> {
        self.take_random_within(BB::full(), rng)
    }

    /// Like [`UntriedPool::take_random`], but prefers cells inside `preferred`
    /// and only falls back to the rest of the pool when none of them are left.
    pub fn take_random_within<R: Rng + ?Sized>(&mut self, preferred: BB, rng: &mut R) -> Option<Position> {
        let mut candidates = self.cells & preferred;
        if candidates.is_empty() {
            candidates = self.cells;
        }
        let len = candidates.count_ones();
        if len == 0 {
            return None;
        }
        let (row, col) = candidates.nth_set_bit(rng.random_range(0..len))?;
        let pos = Position::from_row_col(row, col);
        self.remove(pos);
        Some(pos)
    }

    pub fn len(&self) -> usize {
        self.cells.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> BB {
        self.cells
    }
}

/// Heatmap-driven shot selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TargetingPolicy {
    engine: HeatmapEngine,
}

impl TargetingPolicy {
    pub fn new(config: TargetingConfig) -> Self {
        Self {
            engine: HeatmapEngine::new(
                PlacementSimulator::new(config.placement_attempts),
                config.simulation_count,
            ),
        }
    }

    pub fn engine(&self) -> &HeatmapEngine {
        &self.engine
    }

    /// Pick the next cell to attack and remove it from `pool`.
    ///
    /// The hottest unknown untried cell wins, the first one in row-major
    /// order on ties. When no simulation puts a ship on any candidate the
    /// choice is uniform over the pool (its unknown cells, while any are
    /// left), which keeps the early game from sweeping the board corner to
    /// corner.
    pub fn choose_attack<R: Rng + ?Sized>(
        &self,
        knowledge: &KnowledgeGrid,
        fleet: &FleetState,
        pool: &mut UntriedPool,
        rng: &mut R,
    ) -> Result<Position, TargetingError> {
        if pool.is_empty() {
            return Err(TargetingError::Exhausted);
        }

        let heatmap = self.engine.generate(knowledge, fleet, rng);
        let target = match hottest(&heatmap, knowledge, pool) {
            Some(pos) => {
                pool.remove(pos);
                log::debug!("targeting {} (heat {}/{})", pos, heatmap.get(pos), heatmap.samples());
                pos
            }
            None => {
                let pos = pool
                    .take_random_within(knowledge.unknown(), rng)
                    .ok_or(TargetingError::Exhausted)?;
                log::debug!("no signal from {} samples, random shot at {}", heatmap.samples(), pos);
                pos
            }
        };
        Ok(target)
    }

    /// Fold the board's report for `pos` into `knowledge` and `fleet`.
    ///
    /// The report is validated before anything changes, so a malformed
    /// record leaves both untouched. Reports for a cell that is already
    /// resolved are ignored.
    pub fn register_outcome(
        &self,
        knowledge: &mut KnowledgeGrid,
        fleet: &mut FleetState,
        pos: Position,
        outcome: &Outcome,
    ) -> Result<(), TargetingError> {
        if !pos.in_bounds() {
            return Err(TargetingError::OutOfBounds(pos));
        }
        if let Outcome::Hit(report) = outcome {
            validate_report(pos, report)?;
        }

        match outcome {
            Outcome::Unavailable => {
                log::debug!("attack on {} was rejected by the board", pos);
            }
            Outcome::Miss => {
                knowledge.mark_miss(pos);
            }
            Outcome::Hit(report) => {
                if !knowledge.mark_hit(pos) {
                    return Ok(());
                }
                if let Some(positions) = report.sunk_positions.as_deref() {
                    knowledge.mark_sunk(positions);
                    if fleet.remove_by_name(&report.ship) {
                        log::debug!("{} sunk, {} ships remain", report.ship, fleet.len());
                    } else {
                        log::warn!("sunk ship {} was not in the remaining fleet", report.ship);
                    }
                }
            }
        }
        Ok(())
    }
}

fn hottest(heatmap: &Heatmap, knowledge: &KnowledgeGrid, pool: &UntriedPool) -> Option<Position> {
    let mut best: Option<(Position, u32)> = None;
    for (pos, count) in heatmap.iter() {
        if knowledge.belief_at(pos) != Belief::Unknown || !pool.contains(pos) {
            continue;
        }
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((pos, count));
        }
    }
    best.filter(|&(_, count)| count > 0).map(|(pos, _)| pos)
}

fn validate_report(pos: Position, report: &HitReport) -> Result<(), TargetingError> {
    let malformed = |reason| TargetingError::MalformedOutcome {
        position: pos,
        reason,
    };
    match (report.is_sunk, report.sunk_positions.as_deref()) {
        (false, None) => Ok(()),
        (false, Some(_)) => Err(malformed("sunk positions given for a ship that is not sunk")),
        (true, None) | (true, Some([])) => Err(malformed("sunk ship without its positions")),
        (true, Some(positions)) => {
            if positions.iter().any(|p| !p.in_bounds()) {
                Err(malformed("sunk position outside the board"))
            } else if !positions.contains(&pos) {
                Err(malformed("sunk positions do not include the attacked cell"))
            } else {
                Ok(())
            }
        }
    }
}
