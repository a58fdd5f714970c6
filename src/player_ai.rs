use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    common::{Outcome, Position, TargetingError},
    config::{TargetingConfig, SHIPS},
    fleet::FleetState,
    heatmap::Heatmap,
    knowledge::KnowledgeGrid,
    player::Attacker,
    ship::ShipSpec,
    targeting::{TargetingPolicy, UntriedPool},
};

use alloc::vec::Vec;

/// Heatmap AI opponent. Owns its view of the enemy board and the fleet it
/// still has to find; never sees the real board.
pub struct AiOpponent {
    manifest: Vec<ShipSpec>,
    knowledge: KnowledgeGrid,
    fleet: FleetState,
    pool: UntriedPool,
    policy: TargetingPolicy,
    rng: SmallRng,
}

impl AiOpponent {
    /// AI hunting the standard fleet with default settings.
    pub fn new(rng: SmallRng) -> Self {
        Self::with_config(rng, &SHIPS, TargetingConfig::default())
    }

    pub fn with_config(rng: SmallRng, manifest: &[ShipSpec], config: TargetingConfig) -> Self {
        Self {
            manifest: manifest.to_vec(),
            knowledge: KnowledgeGrid::new(),
            fleet: FleetState::new(manifest),
            pool: UntriedPool::new(),
            policy: TargetingPolicy::new(config),
            rng,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeGrid {
        &self.knowledge
    }

    pub fn fleet(&self) -> &FleetState {
        &self.fleet
    }

    pub fn pool(&self) -> &UntriedPool {
        &self.pool
    }

    /// Heatmap for the current beliefs, without choosing a shot. Draws from
    /// `rng` rather than the opponent's own generator, so rendering it does
    /// not change later choices.
    pub fn heatmap<R: Rng + ?Sized>(&self, rng: &mut R) -> Heatmap {
        self.policy.engine().generate(&self.knowledge, &self.fleet, rng)
    }
}

impl Attacker for AiOpponent {
    fn choose_attack(&mut self) -> Result<Position, TargetingError> {
        self.policy
            .choose_attack(&self.knowledge, &self.fleet, &mut self.pool, &mut self.rng)
    }

    fn register_outcome(&mut self, pos: Position, outcome: &Outcome) -> Result<(), TargetingError> {
        self.policy
            .register_outcome(&mut self.knowledge, &mut self.fleet, pos, outcome)
    }

    fn reset(&mut self) {
        self.knowledge.reset();
        self.fleet.reset(&self.manifest);
        self.pool.reset();
    }
}
