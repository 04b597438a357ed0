//! Offset coordinates address a hex grid like a rectangular array. Every other
//! column is shoved half a tile down, so the layout matches a flat-top grid.
//! Offset coordinates exist purely for authoring and storage convenience: they
//! aren't closed under rotation, and even stepping to a neighbor depends on
//! which column you're in. All the real math converts to [Axial] first.

use crate::hex::{Axial, HexCoordinate, HexDirection};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Which columns get shoved down by half a tile
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum OffsetParity {
    /// Odd columns are shoved down ("odd-q")
    Odd,
    /// Even columns are shoved down ("even-q")
    Even,
}

impl Default for OffsetParity {
    fn default() -> Self {
        Self::Odd
    }
}

/// `(dcol, drow)` steps for each [HexDirection], for columns whose own parity
/// matches the table. The "unshifted" table applies to columns that are not
/// shoved down (even columns for odd-q, odd columns for even-q), "shifted" to
/// the columns that are.
const UNSHIFTED_STEPS: [(i32, i32); 6] =
    [(1, 0), (1, -1), (0, -1), (-1, -1), (-1, 0), (0, 1)];
const SHIFTED_STEPS: [(i32, i32); 6] =
    [(1, 1), (1, 0), (0, -1), (-1, 0), (-1, 1), (0, 1)];

/// A tile position in offset `(col, row)` coordinates. The parity convention
/// travels with the value, so two offsets are only equal if they use the same
/// convention.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.col", "self.row", "self.parity")]
pub struct Offset {
    col: i32,
    row: i32,
    parity: OffsetParity,
}

impl Offset {
    pub const fn new(col: i32, row: i32, parity: OffsetParity) -> Self {
        Self { col, row, parity }
    }

    pub const fn col(&self) -> i32 {
        self.col
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn parity(&self) -> OffsetParity {
        self.parity
    }

    /// Convert an axial coordinate into offset form, using the given parity
    /// convention
    pub fn from_axial(axial: Axial, parity: OffsetParity) -> Self {
        let q = axial.q();
        let row = axial.r() + column_shift(q, parity);
        Self::new(q, row, parity)
    }

    /// Is this column shoved down half a tile, relative to its neighbors?
    fn is_shifted(&self) -> bool {
        let odd_column = self.col & 1 == 1;
        match self.parity {
            OffsetParity::Odd => odd_column,
            OffsetParity::Even => !odd_column,
        }
    }
}

/// The number of rows a column's row index is shifted relative to axial `r`.
/// For odd-q that's `(col - (col & 1)) / 2`, for even-q it's
/// `(col + (col & 1)) / 2`.
///
/// The numerator is always even, but we still divide with `div_euclid` so the
/// result floors for negative columns. `col & 1` is 1 for negative odd columns
/// too, since `i32` is two's complement.
fn column_shift(col: i32, parity: OffsetParity) -> i32 {
    let bit = col & 1;
    match parity {
        OffsetParity::Odd => (col - bit).div_euclid(2),
        OffsetParity::Even => (col + bit).div_euclid(2),
    }
}

impl HexCoordinate for Offset {
    fn to_axial(self) -> Axial {
        Axial::new(self.col, self.row - column_shift(self.col, self.parity))
    }

    fn neighbor(self, direction: HexDirection) -> Self {
        let steps = if self.is_shifted() {
            &SHIFTED_STEPS
        } else {
            &UNSHIFTED_STEPS
        };
        let (dcol, drow) = steps[direction.index()];
        Self::new(self.col + dcol, self.row + drow, self.parity)
    }
}
