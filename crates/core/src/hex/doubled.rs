use crate::{
    hex::{unit::saturate, Axial, HexCoordinate, HexDirection},
    HexError,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// `(dcol, drow)` steps for each [HexDirection]. Unlike offset coordinates,
/// doubled coordinates are translation invariant, so one table covers every
/// tile.
const STEPS: [(i32, i32); 6] =
    [(1, 1), (1, -1), (0, -2), (-1, -1), (-1, 1), (0, 2)];

/// A tile position in doubled `(col, row)` coordinates, where the row scale is
/// doubled: `row = 2r + q`. This gives array-like addressing like offset
/// coordinates do, but with no parity-dependent shifting.
///
/// Only half of all `(col, row)` pairs are real tiles: **`row - col` must be
/// even.** [Doubled::new] doesn't check this (so it can be used in const
/// contexts and hot loops); use [Doubled::try_new] or
/// [HexCoordinate::is_valid] when the input isn't trusted.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {})", "self.col", "self.row")]
pub struct Doubled {
    col: i32,
    row: i32,
}

impl Doubled {
    /// Construct without checking parity
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Construct a doubled coordinate, returning an error if the row and
    /// column have different parity
    pub fn try_new(col: i32, row: i32) -> Result<Self, HexError> {
        let doubled = Self::new(col, row);
        if doubled.is_valid() {
            Ok(doubled)
        } else {
            Err(HexError::InvalidDoubled { col, row })
        }
    }

    pub const fn col(&self) -> i32 {
        self.col
    }

    pub const fn row(&self) -> i32 {
        self.row
    }
}

impl HexCoordinate for Doubled {
    /// For an invalid coordinate, `r` is floored, which maps it onto the tile
    /// just above it
    fn to_axial(self) -> Axial {
        Axial::new(self.col, (self.row - self.col).div_euclid(2))
    }

    fn is_valid(&self) -> bool {
        (self.row - self.col).rem_euclid(2) == 0
    }

    fn neighbor(self, direction: HexDirection) -> Self {
        let (dcol, drow) = STEPS[direction.index()];
        Self::new(self.col + dcol, self.row + drow)
    }

    fn distance_to(self, other: Self) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances-doubled
        let dcol = (i64::from(self.col) - i64::from(other.col)).abs();
        let drow = (i64::from(self.row) - i64::from(other.row)).abs();
        saturate(dcol + 0.max((drow - dcol) / 2))
    }
}

impl From<Axial> for Doubled {
    fn from(axial: Axial) -> Self {
        Self::new(axial.q(), 2 * axial.r() + axial.q())
    }
}
