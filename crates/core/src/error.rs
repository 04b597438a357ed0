use crate::hex::Axial;

/// Errors raised by coordinate construction and lookups. These are all
/// argument errors: they indicate a bug in the caller, so they are surfaced
/// immediately and never corrected behind the caller's back.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum HexError {
    /// A cube coordinate whose components don't sum to zero
    #[error(
        "invalid cube coordinate ({x}, {y}, {z}): components must sum to zero"
    )]
    InvalidCube { x: i32, y: i32, z: i32 },

    /// A doubled coordinate whose row and column have different parity
    #[error(
        "invalid doubled coordinate ({col}, {row}): row and column must \
        have the same parity"
    )]
    InvalidDoubled { col: i32, row: i32 },

    /// A direction index outside `0..6`
    #[error("invalid direction index {index}; must be in 0..6")]
    InvalidDirection { index: usize },

    /// A layout cell size that isn't a finite number of at least
    /// [MIN_CELL_SIZE](crate::layout::MIN_CELL_SIZE)
    #[error("invalid cell size {cell_size}; must be finite and at least 0.001")]
    InvalidCellSize { cell_size: f64 },

    /// Asked for the direction between two coordinates that aren't neighbors
    #[error("{to} is not adjacent to {from}")]
    NotAdjacent { from: Axial, to: Axial },
}
