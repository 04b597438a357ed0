//! Coordinate geometry for hexagonal tile grids. This crate holds the grid
//! math (coordinate systems and conversions, distance, neighbors, areas,
//! lines) plus placement of tiles in a 3D world. Rendering, pathfinding and
//! anything else built on top of the grid lives elsewhere.
//!
//! ```
//! use hexgrid::{Axial, GridConfig, HexGrid};
//!
//! let mut grid = HexGrid::new(GridConfig::default()).unwrap();
//! assert_eq!(grid.distance(Axial::new(0, 0), Axial::new(3, -2)), 3);
//!
//! let area = grid.range(Axial::new(0, 0), 1);
//! assert_eq!(area.len(), 7);
//! // Give the buffer back so the next query can reuse it
//! grid.release(area);
//! ```
//!
//! See [hex] for an explanation of the coordinate systems, and [GridConfig]
//! for details on how a grid can be customized.

mod cache;
mod config;
mod error;
mod grid;
pub mod hex;
mod layout;
mod pool;
mod util;

pub use crate::{
    cache::{BoundedCache, CacheStats, EvictionPolicy, QueryCache},
    config::GridConfig,
    error::HexError,
    grid::HexGrid,
    hex::{
        Axial, Cube, Doubled, FractionalCube, HexCoordinate, HexDirection,
        Offset, OffsetParity,
    },
    layout::{Layout, Orientation, WorldPosition, MIN_CELL_SIZE},
    pool::{BufferPool, PoolStats},
    util::{hex_count, ring_len},
};
