//! Area and path queries: filled ranges, rings, spirals and lines.
//!
//! Each query comes in two flavors. The `*_into` functions append to a
//! caller-provided buffer, so hot loops can reuse allocations (see
//! [crate::BufferPool]). The methods on [Axial] allocate a fresh `Vec`.

use crate::{
    hex::{Axial, FractionalCube, HexDirection},
    util,
};

/// The ring walk starts at the corner `radius` steps this way from the center,
/// then walks each direction in index order. Changing this changes the order
/// of every ring, so it's part of the contract.
const RING_START: HexDirection = HexDirection::SouthWest;

/// Append every tile within `radius` steps of `center` (inclusive) to `buffer`.
/// Appends exactly [util::hex_count] tiles, ordered by `q` then `r`.
pub fn range_into(center: Axial, radius: u32, buffer: &mut Vec<Axial>) {
    let n = radius as i32;
    buffer.reserve(util::hex_count(radius));
    for dq in -n..=n {
        // For each column, the valid rows form one contiguous interval
        let r_min = (-n).max(-dq - n);
        let r_max = n.min(-dq + n);
        for dr in r_min..=r_max {
            buffer.push(center + Axial::new(dq, dr));
        }
    }
}

/// Append every tile exactly `radius` steps from `center` to `buffer`. A radius
/// of 0 gives just the center. Appends exactly [util::ring_len] tiles.
pub fn ring_into(center: Axial, radius: u32, buffer: &mut Vec<Axial>) {
    if radius == 0 {
        buffer.push(center);
        return;
    }

    buffer.reserve(util::ring_len(radius));
    let mut tile = center + RING_START.to_axial() * radius as i32;
    for direction in HexDirection::ALL {
        for _ in 0..radius {
            buffer.push(tile);
            tile = tile.neighbor(direction);
        }
    }
}

/// Append the center, then every ring out to `radius`, to `buffer`. This
/// covers the same tiles as [range_into], but ordered by distance.
pub fn spiral_into(center: Axial, radius: u32, buffer: &mut Vec<Axial>) {
    buffer.reserve(util::hex_count(radius));
    for ring in 0..=radius {
        ring_into(center, ring, buffer);
    }
}

/// Append the tiles on the straight line from `start` to `end` (inclusive on
/// both ends) to `buffer`. For a distance of `D`, this appends exactly `D + 1`
/// tiles, and each one is adjacent to the one before it.
///
/// Each point is sampled by interpolating the cube forms of the endpoints and
/// rounding. Samples that land exactly on a boundary between tiles are not
/// nudged; they fall wherever [FractionalCube::round] puts them. E.g. the
/// line from `(0, 0)` to `(1, 1)` passes through `(1, 0)`.
pub fn line_into(start: Axial, end: Axial, buffer: &mut Vec<Axial>) {
    let distance = start.distance_to(end);
    let a = FractionalCube::from(start);
    let b = FractionalCube::from(end);

    buffer.reserve(distance as usize + 1);
    for i in 0..=distance {
        let t = if distance == 0 {
            0.0
        } else {
            f64::from(i) / f64::from(distance)
        };
        buffer.push(a.lerp(b, t).round().into());
    }
}

impl Axial {
    /// Get every tile within `radius` steps of this one, including this one.
    /// See [range_into].
    pub fn range(self, radius: u32) -> Vec<Axial> {
        let mut buffer = Vec::new();
        range_into(self, radius, &mut buffer);
        buffer
    }

    /// Get every tile exactly `radius` steps from this one. See [ring_into].
    pub fn ring(self, radius: u32) -> Vec<Axial> {
        let mut buffer = Vec::new();
        ring_into(self, radius, &mut buffer);
        buffer
    }

    /// Get this tile, then each ring around it out to `radius`. See
    /// [spiral_into].
    pub fn spiral(self, radius: u32) -> Vec<Axial> {
        let mut buffer = Vec::new();
        spiral_into(self, radius, &mut buffer);
        buffer
    }

    /// Get the tiles on a straight line from this tile to `end`. See
    /// [line_into].
    pub fn line_to(self, end: Axial) -> Vec<Axial> {
        let mut buffer = Vec::new();
        line_into(self, end, &mut buffer);
        buffer
    }
}
