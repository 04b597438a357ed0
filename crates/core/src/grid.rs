use crate::{
    cache::{CacheStats, QueryCache},
    error::HexError,
    hex::{self, Axial, HexCoordinate, Offset},
    layout::{Layout, WorldPosition},
    pool::{BufferPool, PoolStats},
    GridConfig,
};
use anyhow::Context;
use log::debug;
use nalgebra::Point3;
use validator::Validate;

/// The main entrypoint for grid queries. A grid owns a validated config, the
/// [Layout] derived from it, plus the memoization cache and buffer pool that
/// back its queries.
///
/// The pure coordinate algebra is all available directly on [Axial] and
/// friends. Going through a grid adds world placement, caching, and buffer
/// reuse. Every method that touches the cache or pool takes `&mut self`, so a
/// grid can't be shared between threads without external locking.
///
/// ## Buffers
///
/// [Self::range], [Self::ring], [Self::spiral] and [Self::line] return `Vec`s
/// pulled from the grid's pool. Once you're done with one, hand it back with
/// [Self::release] so the next query can reuse the allocation. Dropping it
/// instead is fine, it just won't get reused.
#[derive(Debug)]
pub struct HexGrid {
    config: GridConfig,
    layout: Layout,
    cache: QueryCache,
    pool: BufferPool<Axial>,
}

impl HexGrid {
    /// Create a new grid, with tile `(0, 0)` centered on the world origin.
    /// Returns an error if the given config is invalid.
    pub fn new(config: GridConfig) -> anyhow::Result<Self> {
        Self::with_origin(config, Point3::origin())
    }

    /// Create a new grid, with tile `(0, 0)` centered on the given world
    /// position. Returns an error if the given config is invalid.
    pub fn with_origin(
        config: GridConfig,
        origin: WorldPosition,
    ) -> anyhow::Result<Self> {
        debug!("Creating grid with config {:#?}", config);

        config.validate().context("invalid config")?;

        let layout =
            Layout::new(config.orientation, config.cell_size, origin)?;

        Ok(Self {
            config,
            layout,
            cache: QueryCache::new(config.cache_capacity, config.eviction),
            pool: BufferPool::new(
                config.pool_max_buffers,
                config.pool_buffer_capacity,
            ),
        })
    }

    /// Get a reference to the config that defines this grid
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// World position of a tile's center
    pub fn hex_to_world(&mut self, tile: Axial) -> WorldPosition {
        self.cache.world_position(&self.layout, tile)
    }

    /// Tile that contains a world position. The height (`y`) is ignored.
    pub fn world_to_hex(&self, position: &WorldPosition) -> Axial {
        self.layout.world_to_hex(position)
    }

    pub fn distance(&mut self, a: Axial, b: Axial) -> u32 {
        self.cache.distance(a, b)
    }

    /// All 6 neighbors, in [HexDirection](crate::hex::HexDirection) order
    pub fn neighbors(&mut self, tile: Axial) -> [Axial; 6] {
        self.cache.neighbors(tile)
    }

    /// Get one neighbor by direction index. Fails if the index isn't in
    /// `0..6`.
    pub fn neighbor(
        &self,
        tile: Axial,
        index: usize,
    ) -> Result<Axial, HexError> {
        tile.neighbor_at(index)
    }

    /// Convert to offset coordinates, using the parity from the config
    pub fn to_offset(&mut self, tile: Axial) -> Offset {
        self.cache.offset(tile, self.config.offset_parity)
    }

    /// Convert from offset coordinates. The offset's own parity is respected,
    /// even if it doesn't match the config.
    pub fn from_offset(&self, offset: Offset) -> Axial {
        offset.to_axial()
    }

    /// All tiles within `radius` steps of `center`, including the center
    pub fn range(&mut self, center: Axial, radius: u32) -> Vec<Axial> {
        let mut buffer = self.pool.acquire();
        hex::range_into(center, radius, &mut buffer);
        buffer
    }

    /// All tiles exactly `radius` steps from `center`
    pub fn ring(&mut self, center: Axial, radius: u32) -> Vec<Axial> {
        let mut buffer = self.pool.acquire();
        hex::ring_into(center, radius, &mut buffer);
        buffer
    }

    /// All tiles within `radius` steps of `center`, ordered ring by ring
    /// going outward
    pub fn spiral(&mut self, center: Axial, radius: u32) -> Vec<Axial> {
        let mut buffer = self.pool.acquire();
        hex::spiral_into(center, radius, &mut buffer);
        buffer
    }

    /// Straight line of tiles from `start` to `end`, inclusive on both ends
    pub fn line(&mut self, start: Axial, end: Axial) -> Vec<Axial> {
        let mut buffer = self.pool.acquire();
        hex::line_into(start, end, &mut buffer);
        buffer
    }

    /// Hand a buffer from one of the sequence queries back to the pool
    pub fn release(&mut self, buffer: Vec<Axial>) {
        self.pool.release(buffer);
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn pool_stats(&self) -> PoolStats {
        self.pool.stats()
    }

    /// Drop everything cached and pooled, and reset stats
    pub fn clear(&mut self) {
        debug!(
            "Clearing grid cache ({} entries, {:?}) and pool ({:?})",
            self.cache.len(),
            self.cache.stats(),
            self.pool.stats()
        );
        self.cache.clear();
        self.pool.clear();
    }
}
