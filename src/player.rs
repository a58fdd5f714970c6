use rand::rngs::SmallRng;

use crate::{
    common::{Outcome, Position, TargetingError},
    targeting::UntriedPool,
};

/// Interface implemented by the different attacking strategies.
///
/// The match orchestrator asks for a coordinate, resolves it against the
/// opponent board and reports the outcome back before the next request.
pub trait Attacker {
    /// Choose the next coordinate to attack. Fails with
    /// [`TargetingError::Exhausted`] once every cell has been chosen.
    fn choose_attack(&mut self) -> Result<Position, TargetingError>;

    /// Inform the attacker of the board's answer for `pos`.
    fn register_outcome(&mut self, _pos: Position, _outcome: &Outcome) -> Result<(), TargetingError> {
        Ok(())
    }

    /// Start over for a new game.
    fn reset(&mut self);
}

/// Baseline attacker that fires at random untried cells and ignores
/// feedback.
pub struct RandomAttacker {
    pool: UntriedPool,
    rng: SmallRng,
}

impl RandomAttacker {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            pool: UntriedPool::new(),
            rng,
        }
    }
}

impl Attacker for RandomAttacker {
    fn choose_attack(&mut self) -> Result<Position, TargetingError> {
        self.pool
            .take_random(&mut self.rng)
            .ok_or(TargetingError::Exhausted)
    }

    fn reset(&mut self) {
        self.pool.reset();
    }
}
