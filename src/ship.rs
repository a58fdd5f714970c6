//! Ship definitions and placement masks using our `BitBoard`.

use core::fmt;
use num_traits::{PrimInt, Unsigned, Zero};
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::{BoardError, Position};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Either orientation with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<bool>() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// Fleet manifest entry: a ship's name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSpec {
    name: &'static str,
    length: usize,
}

impl ShipSpec {
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship laid on an N×N board. Extends right (horizontal) or down
/// (vertical) from `origin`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Placement<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    spec: ShipSpec,
    orientation: Orientation,
    origin: Position,
    mask: BitBoard<T, N>,
}

impl<T, const N: usize> Placement<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Lay `spec` at `origin`; fails if any segment leaves the board.
    pub fn new(spec: ShipSpec, orientation: Orientation, origin: Position) -> Result<Self, BoardError> {
        let len = spec.length();
        let fits = match orientation {
            Orientation::Horizontal => origin.y < N && origin.x < N && len <= N - origin.x,
            Orientation::Vertical => origin.x < N && origin.y < N && len <= N - origin.y,
        };
        if !fits {
            return Err(BoardError::ShipOutOfBounds);
        }

        let mut mask = BitBoard::<T, N>::new();
        for i in 0..len {
            let (row, col) = match orientation {
                Orientation::Horizontal => (origin.y, origin.x + i),
                Orientation::Vertical => (origin.y + i, origin.x),
            };
            mask.set(row, col)?;
        }
        Ok(Placement {
            spec,
            orientation,
            origin,
            mask,
        })
    }

    pub fn spec(&self) -> ShipSpec {
        self.spec
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> BitBoard<T, N> {
        self.mask
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.mask.get(pos.y, pos.x).unwrap_or(false)
    }

    /// Cells covered by the ship, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.mask
            .iter_set_bits()
            .map(|(row, col)| Position::from_row_col(row, col))
    }
}

impl<T, const N: usize> fmt::Debug for Placement<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Placement {{ name: \"{}\", origin: {}, orientation: {:?} }}",
            self.spec().name(),
            self.origin(),
            self.orientation(),
        )
    }
}
