//! What the attacker has learned about the opponent board.
//!
//! Beliefs are stored as three disjoint bitboards (misses, unresolved hits
//! and sunk cells); a cell in none of them is still unknown.

use crate::{bitboard::BitBoard, common::Position, config::BOARD_SIZE};

type BB = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Belief about a single opponent cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Belief {
    Unknown,
    Miss,
    Hit,
    Sunk,
}

/// Per-cell beliefs for the opponent board. Transitions are monotone:
/// `Unknown -> Miss`, `Unknown -> Hit -> Sunk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KnowledgeGrid {
    misses: BB,
    hits: BB,
    sunk: BB,
}

impl KnowledgeGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn belief_at(&self, pos: Position) -> Belief {
        if is_set(&self.misses, pos) {
            Belief::Miss
        } else if is_set(&self.hits, pos) {
            Belief::Hit
        } else if is_set(&self.sunk, pos) {
            Belief::Sunk
        } else {
            Belief::Unknown
        }
    }

    /// Record a miss. Returns `false` and leaves the grid untouched unless
    /// the cell was unknown.
    pub fn mark_miss(&mut self, pos: Position) -> bool {
        if !self.expect_unknown(pos, "miss") {
            return false;
        }
        self.misses.set(pos.y, pos.x).is_ok()
    }

    /// Record a hit. Same contract as [`KnowledgeGrid::mark_miss`].
    pub fn mark_hit(&mut self, pos: Position) -> bool {
        if !self.expect_unknown(pos, "hit") {
            return false;
        }
        self.hits.set(pos.y, pos.x).is_ok()
    }

    /// Promote the hit cells of a sunk ship. Cells that are already sunk are
    /// left alone; cells that were never hit are skipped.
    pub fn mark_sunk(&mut self, positions: &[Position]) {
        for &pos in positions {
            match self.belief_at(pos) {
                Belief::Hit => {
                    let _ = self.hits.clear(pos.y, pos.x);
                    let _ = self.sunk.set(pos.y, pos.x);
                }
                Belief::Sunk => {}
                other => {
                    log::warn!("cannot mark {} sunk: cell is {:?}", pos, other);
                }
            }
        }
    }

    fn expect_unknown(&self, pos: Position, what: &str) -> bool {
        match self.belief_at(pos) {
            Belief::Unknown => true,
            current => {
                log::warn!(
                    "ignoring {} at {}: cell already resolved as {:?}",
                    what,
                    pos,
                    current
                );
                false
            }
        }
    }

    pub fn misses(&self) -> BB {
        self.misses
    }

    /// Hits not yet attributed to a sunk ship.
    pub fn hits(&self) -> BB {
        self.hits
    }

    pub fn sunk(&self) -> BB {
        self.sunk
    }

    /// Cells with no belief recorded yet.
    pub fn unknown(&self) -> BB {
        !(self.misses | self.hits | self.sunk)
    }
}

fn is_set(board: &BB, pos: Position) -> bool {
    board.get(pos.y, pos.x).unwrap_or(false)
}
