use crate::{
    cache::EvictionPolicy,
    hex::OffsetParity,
    layout::{self, Orientation},
};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration for a [HexGrid](crate::HexGrid). None of these options
/// affect the grid algebra (distance, neighbors, conversions between axial,
/// cube and doubled form). They control world placement, which offset
/// convention is in effect, and how much memory the grid may hold on to for
/// memoization.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of a tile to one of its corners, in world
    /// units. Uniformly scales all placement math. Must be finite and at
    /// least [MIN_CELL_SIZE](crate::layout::MIN_CELL_SIZE).
    #[validate(custom = "validate_cell_size")]
    pub cell_size: f64,

    /// Whether tiles are pointy-top or flat-top. This only changes where
    /// tiles land in world space.
    pub orientation: Orientation,

    /// Which offset convention [HexGrid::to_offset](crate::HexGrid::to_offset)
    /// produces
    pub offset_parity: OffsetParity,

    /// Maximum number of entries held by **each** memoization table
    /// (distances, neighbors, world positions, offsets). 0 disables caching
    /// entirely.
    #[validate(range(max = 1000000))]
    pub cache_capacity: usize,

    /// What a full cache does with new entries
    pub eviction: EvictionPolicy,

    /// Maximum number of idle buffers the pool keeps around for reuse.
    /// Buffers released beyond this are just dropped.
    #[validate(range(max = 4096))]
    pub pool_max_buffers: usize,

    /// Capacity that freshly allocated pool buffers start with
    #[validate(range(max = 65536))]
    pub pool_buffer_capacity: usize,
}

fn validate_cell_size(cell_size: f64) -> Result<(), ValidationError> {
    if layout::is_valid_cell_size(cell_size) {
        Ok(())
    } else {
        Err(ValidationError::new("cell_size"))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: 1.0,
            orientation: Orientation::PointyTop,
            offset_parity: OffsetParity::Odd,
            cache_capacity: 4096,
            eviction: EvictionPolicy::LeastRecentlyUsed,
            pool_max_buffers: 32,
            pool_buffer_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
    }

    #[test]
    fn test_non_finite_cell_size() {
        for cell_size in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0] {
            let config = GridConfig {
                cell_size,
                ..Default::default()
            };
            let errors = config.validate().unwrap_err();
            assert!(
                errors.field_errors().contains_key("cell_size"),
                "cell size {cell_size} should be rejected: {errors:?}"
            );
        }
    }

    #[test]
    fn test_json_defaults() {
        // Missing fields get filled in from the default
        let config: GridConfig = serde_json::from_str(
            r#"{"cell_size": 2.5, "orientation": "flat_top"}"#,
        )
        .unwrap();
        assert_eq!(
            config,
            GridConfig {
                cell_size: 2.5,
                orientation: Orientation::FlatTop,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_json_round_trip() {
        let config = GridConfig {
            offset_parity: OffsetParity::Even,
            eviction: EvictionPolicy::Retain,
            cache_capacity: 0,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(r#""offset_parity":"even""#), "{json}");
        assert!(json.contains(r#""eviction":"retain""#), "{json}");
        let parsed: GridConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
