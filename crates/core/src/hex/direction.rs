use crate::{hex::Axial, HexError};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use strum::EnumIter;

/// The 6 directions in which hexes line up side-to-side. For any given tile, a
/// direction points from its center to the center of one of its neighbors.
///
/// ## Ordering
///
/// The ordering of this enum is a contract: direction indexes are handed out
/// to callers (see [Self::index] and [Self::from_index]), so **never reorder
/// the variants**. Directions go counter-clockwise, starting at east. The names
/// assume pointy-top tiles and screen space, where negative `r` is up. For
/// flat-top tiles, each index points 30 degrees counter-clockwise of its name.
#[derive(
    Copy,
    Clone,
    Debug,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HexDirection {
    East,
    NorthEast,
    NorthWest,
    West,
    SouthWest,
    SouthEast,
}

impl HexDirection {
    /// All directions, in index order
    pub const ALL: [Self; 6] = [
        Self::East,
        Self::NorthEast,
        Self::NorthWest,
        Self::West,
        Self::SouthWest,
        Self::SouthEast,
    ];

    /// Get the direction at the given index. Anything outside `0..6` is an
    /// error, never wrapped or clamped.
    pub fn from_index(index: usize) -> Result<Self, HexError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(HexError::InvalidDirection { index })
    }

    /// Position of this direction within [Self::ALL]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the direction that is directly opposite this one
    pub fn opposite(self) -> Self {
        Self::ALL[(self.index() + 3) % 6]
    }

    /// The next direction counter-clockwise from this one
    pub fn rotate_counter_clockwise(self) -> Self {
        Self::ALL[(self.index() + 1) % 6]
    }

    /// The next direction clockwise from this one
    pub fn rotate_clockwise(self) -> Self {
        // Add 5 instead of subtracting 1, so we never go negative
        Self::ALL[(self.index() + 5) % 6]
    }

    /// Get the axial offset that moves a coordinate one step in this
    /// direction
    pub const fn to_axial(self) -> Axial {
        match self {
            Self::East => Axial::new(1, 0),
            Self::NorthEast => Axial::new(1, -1),
            Self::NorthWest => Axial::new(0, -1),
            Self::West => Axial::new(-1, 0),
            Self::SouthWest => Axial::new(-1, 1),
            Self::SouthEast => Axial::new(0, 1),
        }
    }
}

impl TryFrom<usize> for HexDirection {
    type Error = HexError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}
