//! This module holds basic types and algorithms related to hexagon grids.
//!
//! ## Coordinate Systems
//!
//! There are four interchangeable ways to name a tile. They all refer to the
//! same grid, and every one of them converts to and from the others exactly.
//! See [Amit Patel's guide](https://www.redblobgames.com/grids/hexagons/) for
//! pictures; the names here follow his.
//!
//! ### Cube
//!
//! Each coordinate has three components (`x`, `y`, and `z`). **For any tile,
//! all three components are integers and `x + y + z = 0`.** Even though hex
//! tiles are laid out in two dimensions, the third component makes the math
//! much simpler: distance is half the Manhattan distance, and rotating by 60
//! degrees is just shuffling and negating components. See [Cube].
//!
//! ### Axial
//!
//! Since `x + y + z = 0`, one component is always redundant. Axial coordinates
//! keep `q = x` and `r = z` and derive the third as needed. **Axial is the
//! canonical representation:** every algorithm in this crate is written
//! against it, and the other representations are converted through it rather
//! than carrying any state of their own. See [Axial].
//!
//! ### Offset
//!
//! Offset coordinates label tiles like cells of a rectangular array, which is
//! handy for authoring and storage. Every other column is shifted by half a
//! tile, and whether the odd or even columns are shifted is a convention
//! ([OffsetParity]) carried with each value. The price is that offset math is
//! parity-dependent: even the step to a neighbor depends on the column. See
//! [Offset].
//!
//! ### Doubled
//!
//! Doubled coordinates are also array-like, but double the row scale instead
//! of shifting columns, so no half-steps ever show up. Only `(col, row)` pairs
//! where `row - col` is even name a tile. See [Doubled].
//!
//! ## Fractional Coordinates
//!
//! Sometimes we need a point that isn't a tile center: halfway along a line,
//! or wherever the user clicked. [FractionalCube] holds a real-valued cube
//! coordinate, and [FractionalCube::round] snaps it back to the nearest tile.
//!
//! ## Directions
//!
//! The six neighbors of a tile are always enumerated in the same order:
//! counter-clockwise, starting east. See [HexDirection].

mod direction;
mod doubled;
mod offset;
mod shape;
mod unit;

pub use self::{
    direction::HexDirection,
    doubled::Doubled,
    offset::{Offset, OffsetParity},
    shape::{line_into, range_into, ring_into, spiral_into},
    unit::{Axial, Cube, FractionalCube, HexCoordinate},
};
use fnv::FnvBuildHasher;
use std::collections::{HashMap, HashSet};

/// A set of axial coordinates
pub type AxialSet = HashSet<Axial, FnvBuildHasher>;
/// A map of axial coordinates to some `T`
pub type AxialMap<T> = HashMap<Axial, T, FnvBuildHasher>;
