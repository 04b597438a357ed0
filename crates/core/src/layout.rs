//! Placement of hex tiles in world space.
//!
//! ## World Coordinates
//!
//! World positions are 3D points in the host engine's space. The grid lies
//! flat on the `x`/`z` plane, and `y` is the vertical axis:
//!
//! +-------------------+
//! |        -z         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        +z         |
//! +-------------------+
//!
//! where `o` is the layout's origin, i.e. the center of tile `(0, 0)`. World
//! `+z` lines up with axial `+r`. Mapping grid→world puts every tile center at
//! the origin's height; mapping world→grid ignores `y` entirely.
//!
//! #### Calculation
//!
//! The grid→world mapping is linear in `(q, r)`, so it's a single 2x2 matrix
//! (which depends on [Orientation]) scaled by the cell size. Going back the
//! other way applies the inverse matrix, which lands on a fractional
//! coordinate, then rounds to the nearest tile.

use crate::{
    hex::{Axial, FractionalCube},
    HexError,
};
use derive_more::Display;
use nalgebra::{Matrix2, Point3, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_3, FRAC_PI_6};
use strum::EnumIter;

/// A position in world space. See the module-level docs for the axes.
pub type WorldPosition = Point3<f64>;

/// Smallest cell size a layout accepts
pub const MIN_CELL_SIZE: f64 = 0.001;

/// Is this usable as a cell size? NaN fails every comparison, so it has to be
/// ruled out explicitly along with the infinities.
pub(crate) fn is_valid_cell_size(cell_size: f64) -> bool {
    cell_size.is_finite() && cell_size >= MIN_CELL_SIZE
}

/// sqrt(3), which nalgebra can't give us in a const context
const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Which way the tiles point. This only changes where tiles land in world
/// space; the grid math is identical either way.
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
pub enum Orientation {
    /// A vertex points up (towards `-z`). Rows of tiles are horizontal.
    PointyTop,
    /// A flat side faces up (towards `-z`). Columns of tiles are vertical.
    /// This is the orientation that [crate::hex::Offset] and
    /// [crate::hex::Doubled] coordinates line up with.
    FlatTop,
}

impl Default for Orientation {
    fn default() -> Self {
        Self::PointyTop
    }
}

impl Orientation {
    /// Matrix that maps `(q, r)` onto the world plane, for a cell size of 1
    pub fn forward_matrix(self) -> Matrix2<f64> {
        match self {
            Self::PointyTop => Matrix2::new(SQRT_3, SQRT_3 / 2.0, 0.0, 1.5),
            Self::FlatTop => Matrix2::new(1.5, 0.0, SQRT_3 / 2.0, SQRT_3),
        }
    }

    /// Inverse of [Self::forward_matrix]
    pub fn inverse_matrix(self) -> Matrix2<f64> {
        match self {
            Self::PointyTop => {
                Matrix2::new(SQRT_3 / 3.0, -1.0 / 3.0, 0.0, 2.0 / 3.0)
            }
            Self::FlatTop => {
                Matrix2::new(2.0 / 3.0, 0.0, -1.0 / 3.0, SQRT_3 / 3.0)
            }
        }
    }

    /// Angle of the first corner, measured from `+x` towards `+z`
    fn corner_start_angle(self) -> f64 {
        match self {
            Self::PointyTop => FRAC_PI_6,
            Self::FlatTop => 0.0,
        }
    }
}

/// Everything needed to place tiles in world space
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    orientation: Orientation,
    /// Distance from a tile's center to any of its corners, in world units.
    /// This is also the length of each side.
    cell_size: f64,
    /// World position of the center of tile `(0, 0)`
    origin: WorldPosition,
}

impl Layout {
    /// Build a layout. Returns an error if the cell size is not finite or is
    /// below [MIN_CELL_SIZE].
    pub fn new(
        orientation: Orientation,
        cell_size: f64,
        origin: WorldPosition,
    ) -> Result<Self, HexError> {
        if !is_valid_cell_size(cell_size) {
            return Err(HexError::InvalidCellSize { cell_size });
        }
        Ok(Self {
            orientation,
            cell_size,
            origin,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    pub fn origin(&self) -> WorldPosition {
        self.origin
    }

    /// Get the world position of a tile's center
    pub fn hex_to_world(&self, hex: Axial) -> WorldPosition {
        let axial = Vector2::new(f64::from(hex.q()), f64::from(hex.r()));
        let planar =
            self.orientation.forward_matrix() * axial * self.cell_size;
        Point3::new(
            self.origin.x + planar.x,
            self.origin.y,
            self.origin.z + planar.y,
        )
    }

    /// Map a world position onto the grid without rounding. The result
    /// generally lies between tile centers.
    pub fn world_to_fractional(
        &self,
        position: &WorldPosition,
    ) -> FractionalCube {
        let planar = Vector2::new(
            position.x - self.origin.x,
            position.z - self.origin.z,
        ) / self.cell_size;
        let axial = self.orientation.inverse_matrix() * planar;
        FractionalCube::from_axial(axial.x, axial.y)
    }

    /// Get the tile that contains a world position
    pub fn world_to_hex(&self, position: &WorldPosition) -> Axial {
        self.world_to_fractional(position).round().into()
    }

    /// Get the world positions of a tile's 6 corners, going around from
    /// `+x` towards `+z`
    pub fn corners(&self, hex: Axial) -> [WorldPosition; 6] {
        let center = self.hex_to_world(hex);
        let start = self.orientation.corner_start_angle();
        let mut corners = [center; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            let angle = start + FRAC_PI_3 * i as f64;
            corner.x += self.cell_size * angle.cos();
            corner.z += self.cell_size * angle.sin();
        }
        corners
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            orientation: Orientation::default(),
            cell_size: 1.0,
            origin: Point3::origin(),
        }
    }
}
