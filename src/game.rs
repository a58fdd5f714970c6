use crate::{
    board::TargetBoard,
    common::{Outcome, TargetingError},
    config::CELL_COUNT,
    player::Attacker,
};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// Shot statistics for one attacker against one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameReport {
    pub shots: usize,
    pub hits: usize,
    pub ships_sunk: usize,
    pub rejected: usize,
}

/// Drives an attacker against a target board, one shot per turn.
pub struct GameEngine<'a, A: Attacker + ?Sized> {
    attacker: &'a mut A,
    board: &'a mut TargetBoard,
    report: GameReport,
}

impl<'a, A: Attacker + ?Sized> GameEngine<'a, A> {
    pub fn new(attacker: &'a mut A, board: &'a mut TargetBoard) -> Self {
        Self {
            attacker,
            board,
            report: GameReport::default(),
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn report(&self) -> GameReport {
        self.report
    }

    /// Play a single turn, returning the board's answer.
    pub fn step(&mut self) -> Result<Outcome, TargetingError> {
        let target = self.attacker.choose_attack()?;
        let outcome = self.board.attack(target);
        self.attacker.register_outcome(target, &outcome)?;

        self.report.shots += 1;
        match &outcome {
            Outcome::Hit(report) => {
                self.report.hits += 1;
                if report.is_sunk {
                    self.report.ships_sunk += 1;
                }
            }
            Outcome::Unavailable => self.report.rejected += 1,
            Outcome::Miss => {}
        }
        log::debug!("shot {} at {}: {:?}", self.report.shots, target, outcome);
        Ok(outcome)
    }

    /// Keep shooting until every ship is sunk. An attacker that runs out of
    /// cells first surfaces [`TargetingError::Exhausted`].
    pub fn play_out(&mut self) -> Result<GameReport, TargetingError> {
        while self.status() == GameStatus::InProgress {
            if self.report.shots >= CELL_COUNT {
                return Err(TargetingError::Exhausted);
            }
            self.step()?;
        }
        log::debug!(
            "fleet destroyed in {} shots ({} hits)",
            self.report.shots,
            self.report.hits
        );
        Ok(self.report)
    }
}
