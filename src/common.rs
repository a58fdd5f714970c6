//! Common types: board coordinates, attack outcomes and error enums.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::config::BOARD_SIZE;

const GRID_SIZE: usize = BOARD_SIZE as usize;

/// A cell on the board: column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Position for a `(row, col)` pair as produced by bitboard iteration.
    pub const fn from_row_col(row: usize, col: usize) -> Self {
        Self { x: col, y: row }
    }

    pub const fn from_index(index: usize) -> Self {
        Self {
            x: index % GRID_SIZE,
            y: index / GRID_SIZE,
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.x < GRID_SIZE && self.y < GRID_SIZE
    }

    /// Row-major index into a flat board array.
    pub const fn index(&self) -> usize {
        self.y * GRID_SIZE + self.x
    }

    /// Every coordinate of the board in row-major scan order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE * GRID_SIZE).map(Position::from_index)
    }
}

impl fmt::Display for Position {
    /// Chart notation: column letter then 1-based row, e.g. `C7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        let col = (b'A' + self.x as u8) as char;
        write!(f, "{}{}", col, self.y + 1)
    }
}

/// What the target board reports after a hit.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct HitReport {
    pub ship: String,
    pub is_sunk: bool,
    /// Every cell of the ship; present exactly when `is_sunk` is set.
    pub sunk_positions: Option<Vec<Position>>,
}

/// Result of an attack, as reported by the board that was attacked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Miss,
    Hit(HitReport),
    /// The board refused the attack (e.g. the cell was already attacked).
    Unavailable,
}

impl Outcome {
    /// A hit that did not sink its ship.
    pub fn hit(ship: &str) -> Self {
        Outcome::Hit(HitReport {
            ship: ship.into(),
            is_sunk: false,
            sunk_positions: None,
        })
    }

    /// A hit that sank `ship`, which occupied `positions`.
    pub fn sunk(ship: &str, positions: Vec<Position>) -> Self {
        Outcome::Hit(HitReport {
            ship: ship.into(),
            is_sunk: true,
            sunk_positions: Some(positions),
        })
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Outcome::Hit(_))
    }

    pub fn is_sunk(&self) -> bool {
        matches!(self, Outcome::Hit(HitReport { is_sunk: true, .. }))
    }
}

/// Errors surfaced by attackers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetingError {
    /// Every cell of the board has already been targeted.
    #[error("all positions exhausted")]
    Exhausted,
    /// An outcome record that cannot be applied without corrupting state.
    #[error("malformed outcome at {position}: {reason}")]
    MalformedOutcome {
        position: Position,
        reason: &'static str,
    },
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
}

/// Errors returned by target board operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("BitBoard error: {0}")]
    BitBoardError(#[from] BitBoardError),
    #[error("Ship placement overlaps with another ship")]
    ShipOverlaps,
    #[error("Ship placement is out of bounds")]
    ShipOutOfBounds,
    #[error("Unable to place ship")]
    UnableToPlaceShip,
}
