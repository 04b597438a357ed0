//! This sub-module contains the canonical coordinate types of the hex grid,
//! axial and cube, along with the trait that every coordinate representation
//! implements. See the parent module documentation for more info on the
//! coordinate systems.

use crate::{
    hex::HexDirection,
    layout::{Layout, WorldPosition},
    HexError,
};
use derive_more::{Add, AddAssign, Display, Mul, Neg, Sub, SubAssign};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt::Debug, hash::Hash, ops};

/// The capability set shared by every hex coordinate representation. Any
/// algorithm written against this trait works uniformly for axial, cube,
/// offset and doubled coordinates.
///
/// Most of the trait is implemented by converting to [Axial], which is the
/// canonical representation. Implementors only need to supply the axial
/// conversion and a single-step neighbor lookup, but may override anything
/// that has a cheaper native formula.
pub trait HexCoordinate: Copy + Debug + Eq + Hash {
    /// Convert to the canonical axial representation. This conversion is
    /// exact for every representation.
    fn to_axial(self) -> Axial;

    /// Convert to cube form, where distance and rotation are simplest
    fn to_cube(self) -> Cube {
        self.to_axial().into()
    }

    /// Check representation-specific constraints. Representations with no
    /// constraint beyond integrality are always valid.
    fn is_valid(&self) -> bool {
        true
    }

    /// Get the coordinate one step away in the given direction. Must be O(1).
    fn neighbor(self, direction: HexDirection) -> Self;

    /// Get the neighbor for a numeric direction index, as defined by the
    /// ordering of [HexDirection]. Returns an error if the index isn't in
    /// `0..6`.
    fn neighbor_at(self, index: usize) -> Result<Self, HexError> {
        let direction = HexDirection::from_index(index)?;
        Ok(self.neighbor(direction))
    }

    /// Get all 6 neighbors, in [HexDirection] order
    fn neighbors(self) -> [Self; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// Number of single-tile steps between two coordinates
    fn distance_to(self, other: Self) -> u32 {
        self.to_axial().distance_to(other.to_axial())
    }

    /// Get the world position of this coordinate's tile center
    fn to_world_position(self, layout: &Layout) -> WorldPosition {
        layout.hex_to_world(self.to_axial())
    }
}

/// A tile position in axial coordinates. This is the canonical representation
/// of the grid: every other representation converts through it, and none of
/// them own any derived state.
///
/// ## Implementation
///
/// The third cube component `s` is always `-q - r`, so we never store it.
/// There's no constraint on `q` and `r` beyond being integers, which means
/// every axial value is valid by construction.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    AddAssign,
    SubAssign,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", "self.q", "self.r")]
pub struct Axial {
    q: i32,
    r: i32,
}

impl Axial {
    pub const ORIGIN: Self = Self::new(0, 0);

    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub const fn q(&self) -> i32 {
        self.q
    }

    pub const fn r(&self) -> i32 {
        self.r
    }

    /// The implicit third component. Since q+r+s=0, we can always derive it.
    pub const fn s(&self) -> i32 {
        -self.q - self.r
    }

    /// Distance from the origin
    pub fn length(self) -> u32 {
        self.distance_to(Self::ORIGIN)
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the points are equal,
    /// 1 if the tiles are adjacent, 2 if there is 1 tile between them, etc.
    ///
    /// The math runs in `i64`, so tiles near opposite ends of the `i32` range
    /// don't overflow. Distances beyond `u32::MAX` saturate.
    pub fn distance_to(self, other: Axial) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        // Each step touches two of the three components, hence the halving
        saturate((dq.abs() + (dq + dr).abs() + dr.abs()) / 2)
    }

    /// Get the tile adjacent to this one in the given direction
    pub fn neighbor(self, direction: HexDirection) -> Axial {
        self + direction.to_axial()
    }

    /// Get all 6 adjacent tiles, in [HexDirection] order
    pub fn neighbors(self) -> [Axial; 6] {
        HexDirection::ALL.map(|direction| self.neighbor(direction))
    }

    /// Find which direction leads from this tile to an adjacent one. This is
    /// the inverse of [Self::neighbor]. Returns an error if the two tiles
    /// aren't adjacent (including if they're equal).
    pub fn direction_to(self, other: Axial) -> Result<HexDirection, HexError> {
        let offset = other - self;
        HexDirection::ALL
            .iter()
            .copied()
            .find(|direction| direction.to_axial() == offset)
            .ok_or(HexError::NotAdjacent {
                from: self,
                to: other,
            })
    }

    /// Rotate this coordinate 60 degrees clockwise around `center`. In terms
    /// of [HexDirection], this maps `East` onto `SouthEast`.
    pub fn rotate_clockwise(self, center: Axial) -> Axial {
        let relative = Cube::from(self - center);
        Axial::from(relative.rotate_clockwise()) + center
    }

    /// Rotate this coordinate 60 degrees counter-clockwise around `center`.
    /// In terms of [HexDirection], this maps `East` onto `NorthEast`.
    pub fn rotate_counter_clockwise(self, center: Axial) -> Axial {
        let relative = Cube::from(self - center);
        Axial::from(relative.rotate_counter_clockwise()) + center
    }
}

impl ops::Add<HexDirection> for Axial {
    type Output = Axial;

    fn add(self, rhs: HexDirection) -> Self::Output {
        self.neighbor(rhs)
    }
}

impl HexCoordinate for Axial {
    fn to_axial(self) -> Axial {
        self
    }

    fn neighbor(self, direction: HexDirection) -> Self {
        Axial::neighbor(self, direction)
    }

    fn distance_to(self, other: Self) -> u32 {
        Axial::distance_to(self, other)
    }
}

impl From<Cube> for Axial {
    fn from(cube: Cube) -> Self {
        Self::new(cube.x, cube.z)
    }
}

/// A tile position in cube coordinates. Each coordinate has three components
/// (`x`, `y`, and `z`), and **for every valid coordinate, `x + y + z = 0`**.
/// See this page for info on how the cube coordinate system works:
/// https://www.redblobgames.com/grids/hexagons/#coordinates-cube
///
/// Cube form maps onto axial as `x = q`, `z = r`, `y = -q - r`.
///
/// The invariant is enforced at construction: [Cube::new] rejects any triple
/// that doesn't sum to zero, and deserialization goes through the same check.
/// A bad sum poisons every distance or rotation computed from it, so we never
/// try to patch it up.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
#[serde(try_from = "CubeRepr")]
pub struct Cube {
    x: i32,
    y: i32,
    z: i32,
}

impl Cube {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Construct a new cube coordinate. Returns an error if the components
    /// don't sum to zero.
    pub fn new(x: i32, y: i32, z: i32) -> Result<Self, HexError> {
        if i64::from(x) + i64::from(y) + i64::from(z) == 0 {
            Ok(Self { x, y, z })
        } else {
            Err(HexError::InvalidCube { x, y, z })
        }
    }

    pub const fn x(&self) -> i32 {
        self.x
    }

    pub const fn y(&self) -> i32 {
        self.y
    }

    pub const fn z(&self) -> i32 {
        self.z
    }

    /// Rotate 60 degrees clockwise around the origin
    pub fn rotate_clockwise(self) -> Self {
        // Rotation is just a shuffle plus a negation. Both preserve the sum,
        // so we don't need to re-validate.
        Self {
            x: -self.z,
            y: -self.x,
            z: -self.y,
        }
    }

    /// Rotate 60 degrees counter-clockwise around the origin
    pub fn rotate_counter_clockwise(self) -> Self {
        Self {
            x: -self.y,
            y: -self.z,
            z: -self.x,
        }
    }
}

impl HexCoordinate for Cube {
    fn to_axial(self) -> Axial {
        self.into()
    }

    fn to_cube(self) -> Cube {
        self
    }

    fn is_valid(&self) -> bool {
        i64::from(self.x) + i64::from(self.y) + i64::from(self.z) == 0
    }

    fn neighbor(self, direction: HexDirection) -> Self {
        self + Cube::from(direction.to_axial())
    }

    fn distance_to(self, other: Self) -> u32 {
        let dx = i64::from(self.x) - i64::from(other.x);
        let dy = i64::from(self.y) - i64::from(other.y);
        let dz = i64::from(self.z) - i64::from(other.z);
        saturate((dx.abs() + dy.abs() + dz.abs()) / 2)
    }
}

/// Narrow a distance computed in `i64` down to `u32`, clamping anything too
/// big to represent
pub(crate) fn saturate(distance: i64) -> u32 {
    u32::try_from(distance).unwrap_or(u32::MAX)
}

impl From<Axial> for Cube {
    fn from(axial: Axial) -> Self {
        Self {
            x: axial.q,
            y: axial.s(),
            z: axial.r,
        }
    }
}

impl ops::Mul<i32> for Cube {
    type Output = Cube;

    fn mul(self, rhs: i32) -> Self::Output {
        // Scaling preserves a zero sum
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}

/// Unvalidated mirror of [Cube], so deserialization can run through
/// [Cube::new]
#[derive(Deserialize)]
#[serde(rename = "Cube")]
struct CubeRepr {
    x: i32,
    y: i32,
    z: i32,
}

impl TryFrom<CubeRepr> for Cube {
    type Error = HexError;

    fn try_from(value: CubeRepr) -> Result<Self, Self::Error> {
        Self::new(value.x, value.y, value.z)
    }
}

/// A cube coordinate with real-valued components. This type is useful for
/// intermediate values, e.g. while interpolating between two tiles or mapping
/// a world position back onto the grid. It is **not** validated: accumulated
/// float error means the components only approximately sum to zero. Use
/// [FractionalCube::round] to get back to a real tile.
#[derive(Copy, Clone, Debug, PartialEq, Display, Add, Sub, Mul, Neg)]
#[display(fmt = "({}, {}, {})", "self.x", "self.y", "self.z")]
pub struct FractionalCube {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl FractionalCube {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Build a fractional cube from fractional axial components
    pub fn from_axial(q: f64, r: f64) -> Self {
        Self::new(q, -q - r, r)
    }

    /// Linearly interpolate between two points. `t = 0` gives `self` and
    /// `t = 1` gives `other`, exactly.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Round to the nearest valid tile.
    ///
    /// Each component is rounded independently (half away from zero), which
    /// can break the zero sum. To restore it, the component that moved the
    /// most during rounding is recomputed from the other two. The component
    /// is only replaced if its delta is strictly the largest, checking `x`
    /// first, then `y`; if neither `x` nor `y` wins, `z` is recomputed.
    ///
    /// Rounding a point that is already a tile center returns that tile.
    pub fn round(self) -> Cube {
        let mut x = self.x.round();
        let mut y = self.y.round();
        let mut z = self.z.round();

        let x_diff = (x - self.x).abs();
        let y_diff = (y - self.y).abs();
        let z_diff = (z - self.z).abs();

        if x_diff > y_diff && x_diff > z_diff {
            x = -y - z;
        } else if y_diff > z_diff {
            y = -x - z;
        } else {
            z = -x - y;
        }

        // One component was just derived from the other two, so the sum is
        // exactly zero
        Cube {
            x: x as i32,
            y: y as i32,
            z: z as i32,
        }
    }
}

impl From<Cube> for FractionalCube {
    fn from(cube: Cube) -> Self {
        Self::new(cube.x.into(), cube.y.into(), cube.z.into())
    }
}

impl From<Axial> for FractionalCube {
    fn from(axial: Axial) -> Self {
        Cube::from(axial).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};

    #[test]
    fn test_distance_to() {
        let p0 = Axial::ORIGIN;
        let p1 = Axial::new(1, -1);
        let p2 = Axial::new(-1, 2);
        let p3 = Axial::new(3, -2);

        assert_eq!(p0.distance_to(p0), 0);
        assert_eq!(p3.distance_to(p3), 0);

        assert_eq!(p0.distance_to(p1), 1);
        assert_eq!(p0.distance_to(p2), 2);
        assert_eq!(p0.distance_to(p3), 3);

        assert_eq!(p1.distance_to(p2), 3);
        assert_eq!(p2.distance_to(p3), 4);
        assert_eq!(p3.distance_to(p2), 4);
    }

    #[test]
    fn test_distance_far_apart() {
        let a = Axial::new(-600_000_000, 0);
        let b = Axial::new(600_000_000, 0);
        assert_eq!(a.distance_to(b), 1_200_000_000);
        assert_eq!(
            HexCoordinate::distance_to(Cube::from(a), Cube::from(b)),
            1_200_000_000
        );

        // Too far to fit in a u32
        let min = Axial::new(i32::MIN, i32::MIN);
        let max = Axial::new(i32::MAX, i32::MAX);
        assert_eq!(min.distance_to(max), u32::MAX);
    }

    #[test]
    fn test_cube_distance_matches_axial() {
        let a = Axial::new(-4, 7);
        let b = Axial::new(2, -3);
        assert_eq!(
            HexCoordinate::distance_to(Cube::from(a), Cube::from(b)),
            a.distance_to(b)
        );
    }

    #[test]
    fn test_cube_new() {
        let cube = Cube::new(1, -3, 2).unwrap();
        assert_eq!((cube.x(), cube.y(), cube.z()), (1, -3, 2));
        assert!(cube.is_valid());
        assert_eq!(
            Cube::new(1, 1, 1),
            Err(HexError::InvalidCube { x: 1, y: 1, z: 1 })
        );
    }

    #[test]
    fn test_axial_cube_mapping() {
        let axial = Axial::new(3, -5);
        let cube = Cube::from(axial);
        assert_eq!((cube.x(), cube.y(), cube.z()), (3, 2, -5));
        assert_eq!(axial.s(), 2);
        assert_eq!(Axial::from(cube), axial);
    }

    #[test]
    fn test_neighbors() {
        let neighbors = Axial::new(2, -1).neighbors();
        assert_eq!(
            neighbors,
            [
                Axial::new(3, -1),
                Axial::new(3, -2),
                Axial::new(2, -2),
                Axial::new(1, -1),
                Axial::new(1, 0),
                Axial::new(2, 0),
            ]
        );
    }

    #[test]
    fn test_neighbor_at() {
        let tile = Axial::new(-3, 4);
        assert_eq!(tile.neighbor_at(0), Ok(Axial::new(-2, 4)));
        assert_eq!(tile.neighbor_at(5), Ok(Axial::new(-3, 5)));
        assert_eq!(
            tile.neighbor_at(6),
            Err(HexError::InvalidDirection { index: 6 })
        );
    }

    #[test]
    fn test_direction_to() {
        let tile = Axial::new(5, 5);
        for direction in HexDirection::ALL {
            assert_eq!(tile.direction_to(tile.neighbor(direction)), Ok(direction));
        }

        let far = Axial::new(7, 5);
        assert_eq!(
            tile.direction_to(far),
            Err(HexError::NotAdjacent { from: tile, to: far })
        );
        assert!(tile.direction_to(tile).is_err());
    }

    #[test]
    fn test_rotate() {
        let center = Axial::new(1, 1);
        let east = center + HexDirection::East;
        assert_eq!(
            east.rotate_clockwise(center),
            center + HexDirection::SouthEast
        );
        assert_eq!(
            east.rotate_counter_clockwise(center),
            center + HexDirection::NorthEast
        );

        let mut tile = Axial::new(4, -2);
        for _ in 0..6 {
            let rotated = tile.rotate_clockwise(center);
            assert_eq!(rotated.distance_to(center), tile.distance_to(center));
            tile = rotated;
        }
        assert_eq!(tile, Axial::new(4, -2));
    }

    #[test]
    fn test_round_idempotent() {
        for cube in [
            Cube::ORIGIN,
            Cube::new(3, -1, -2).unwrap(),
            Cube::new(-7, 10, -3).unwrap(),
        ] {
            assert_eq!(FractionalCube::from(cube).round(), cube);
        }
    }

    #[test]
    fn test_round_fixes_largest_delta() {
        // x moves the most, so it gets recomputed
        let rounded = FractionalCube::new(0.4, -0.3, -0.1).round();
        assert_eq!(rounded, Cube::ORIGIN);

        // z moves the most
        let rounded = FractionalCube::new(1.1, -0.7, -0.4).round();
        assert_eq!(rounded, Cube::new(1, -1, 0).unwrap());

        // y moves the most
        let rounded = FractionalCube::new(0.8, -1.45, 0.65).round();
        assert_eq!(rounded, Cube::new(1, -2, 1).unwrap());
    }

    #[test]
    fn test_round_tie() {
        // Midpoint between (0, 0) and (1, 1) in axial. x and z tie, neither is
        // strictly largest, so z gets recomputed.
        let rounded = FractionalCube::new(0.5, -1.0, 0.5).round();
        assert_eq!(rounded, Cube::new(1, -1, 0).unwrap());
    }

    #[test]
    fn test_lerp() {
        let a = FractionalCube::from(Axial::new(0, 0));
        let b = FractionalCube::from(Axial::new(4, -2));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), FractionalCube::new(2.0, -1.0, -1.0));
    }

    #[test]
    fn test_axial_serde() {
        assert_tokens(
            &Axial::new(1, -2),
            &[
                Token::Struct {
                    name: "Axial",
                    len: 2,
                },
                Token::Str("q"),
                Token::I32(1),
                Token::Str("r"),
                Token::I32(-2),
                Token::StructEnd,
            ],
        );
    }

    #[test]
    fn test_cube_serde() {
        assert_tokens(
            &Cube::new(1, -2, 1).unwrap(),
            &[
                Token::Struct {
                    name: "Cube",
                    len: 3,
                },
                Token::Str("x"),
                Token::I32(1),
                Token::Str("y"),
                Token::I32(-2),
                Token::Str("z"),
                Token::I32(1),
                Token::StructEnd,
            ],
        );

        // Deserialization has to enforce the invariant too
        assert_de_tokens_error::<Cube>(
            &[
                Token::Struct {
                    name: "Cube",
                    len: 3,
                },
                Token::Str("x"),
                Token::I32(1),
                Token::Str("y"),
                Token::I32(1),
                Token::Str("z"),
                Token::I32(1),
                Token::StructEnd,
            ],
            "invalid cube coordinate (1, 1, 1): components must sum to zero",
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Axial::new(-1, 2).to_string(), "(-1, 2)");
        assert_eq!(Cube::new(-1, -1, 2).unwrap().to_string(), "(-1, -1, 2)");
    }
}
