//! The board being attacked: true ship positions and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Outcome, Position};
use crate::config::BOARD_SIZE;
use crate::ship::{Orientation, Placement, ShipSpec};

const GRID_SIZE: usize = BOARD_SIZE as usize;

type BB = BitBoard<u128, GRID_SIZE>;

/// A ship laid on the standard board.
pub type ShipPlacement = Placement<u128, GRID_SIZE>;

#[derive(Clone, Copy, PartialEq, Eq)]
struct PlacedShip {
    placement: ShipPlacement,
    hits: BB,
}

impl PlacedShip {
    fn is_sunk(&self) -> bool {
        self.hits.covers(&self.placement.mask())
    }
}

/// Ship placements plus every shot taken against them.
#[derive(Clone, Default)]
pub struct TargetBoard {
    ships: Vec<PlacedShip>,
    ship_map: BB,
    hits: BB,
    misses: BB,
}

impl TargetBoard {
    /// Create an empty board (no ships placed).
    pub fn new() -> Self {
        Self::default()
    }

    /// A board with every ship of `manifest` placed at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, manifest: &[ShipSpec]) -> Result<Self, BoardError> {
        let mut board = Self::new();
        for &spec in manifest {
            let (origin, orientation) = board.random_placement(rng, spec)?;
            board.place(spec, origin, orientation)?;
        }
        Ok(board)
    }

    /// Place a single ship at `origin`.
    pub fn place(
        &mut self,
        spec: ShipSpec,
        origin: Position,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let placement = ShipPlacement::new(spec, orientation, origin)?;
        let mask = placement.mask();
        if mask.intersects(&self.ship_map) {
            return Err(BoardError::ShipOverlaps);
        }
        self.ship_map |= mask;
        self.ships.push(PlacedShip {
            placement,
            hits: BB::new(),
        });
        Ok(())
    }

    /// Returns a random in-bounds, non-overlapping origin and orientation
    /// for `spec`.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        spec: ShipSpec,
    ) -> Result<(Position, Orientation), BoardError> {
        if spec.length() == 0 || spec.length() > GRID_SIZE {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..100 {
            let orientation = Orientation::random(rng);
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (GRID_SIZE - spec.length(), GRID_SIZE - 1),
                Orientation::Vertical => (GRID_SIZE - 1, GRID_SIZE - spec.length()),
            };
            let origin = Position::new(rng.random_range(0..=max_x), rng.random_range(0..=max_y));
            let placement = ShipPlacement::new(spec, orientation, origin)?;
            if !placement.mask().intersects(&self.ship_map) {
                return Ok((origin, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Resolve a shot at `pos`. Repeated or out-of-range shots are refused
    /// with [`Outcome::Unavailable`]; sinking shots carry the whole ship.
    pub fn attack(&mut self, pos: Position) -> Outcome {
        let (row, col) = (pos.y, pos.x);
        let seen = self.hits.get(row, col).unwrap_or(true) || self.misses.get(row, col).unwrap_or(true);
        if !pos.in_bounds() || seen {
            return Outcome::Unavailable;
        }

        let Some(ship) = self.ships.iter_mut().find(|s| s.placement.contains(pos)) else {
            let _ = self.misses.set(row, col);
            return Outcome::Miss;
        };
        let _ = self.hits.set(row, col);
        let _ = ship.hits.set(row, col);

        let spec = ship.placement.spec();
        if ship.is_sunk() {
            Outcome::sunk(spec.name(), ship.placement.cells().collect())
        } else {
            Outcome::hit(spec.name())
        }
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(PlacedShip::is_sunk)
    }

    pub fn placements(&self) -> impl Iterator<Item = &ShipPlacement> + '_ {
        self.ships.iter().map(|s| &s.placement)
    }

    /// Board occupancy mask of all ships.
    pub fn ship_map(&self) -> BB {
        self.ship_map
    }

    pub fn shots_taken(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones()
    }
}

impl fmt::Debug for TargetBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TargetBoard")
            .field("ships", &self.placements().collect::<Vec<_>>())
            .field("hits", &self.hits.count_ones())
            .field("misses", &self.misses.count_ones())
            .finish()
    }
}
