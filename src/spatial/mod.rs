//! Spatial primitives: the occupancy grid and positioned tiles

/// Boolean cell occupancy matrix
pub mod occupancy;
/// Tiles, their identity keys and single-step moves
pub mod tile;

pub use occupancy::OccupancyGrid;
pub use tile::{Color, Direction, Tile, TileKey};
