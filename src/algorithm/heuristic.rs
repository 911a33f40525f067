use crate::io::configuration::{DEFAULT_HEURISTIC_SHAPE, DEFAULT_HEURISTIC_TARGET};
use crate::spatial::tile::TileKey;

/// Squared distance of a designated tile shape from a target cell
///
/// Only orders the frontier; it never prunes reachability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DistanceHeuristic {
    /// Extent `(width, height)` of the tracked tile
    pub shape: (i32, i32),
    /// Target position `(x, y)` of the tracked tile
    pub target: (i32, i32),
}

impl Default for DistanceHeuristic {
    fn default() -> Self {
        Self {
            shape: DEFAULT_HEURISTIC_SHAPE,
            target: DEFAULT_HEURISTIC_TARGET,
        }
    }
}

impl DistanceHeuristic {
    /// Create a heuristic tracking tiles of `shape` towards `target`
    pub const fn new(shape: (i32, i32), target: (i32, i32)) -> Self {
        Self { shape, target }
    }

    /// Test whether a tile has the tracked extent
    pub const fn tracks(&self, key: TileKey) -> bool {
        key.width == self.shape.0 && key.height == self.shape.1
    }

    /// Squared distance of the first tracked tile in `keys`, or 0 if none is tracked
    ///
    /// Saturates at `u64::MAX` for targets far outside any grid.
    pub fn distance<I>(&self, keys: I) -> u64
    where
        I: IntoIterator<Item = TileKey>,
    {
        keys.into_iter()
            .find(|&key| self.tracks(key))
            .map_or(0, |key| {
                let dx = (i64::from(key.x) - i64::from(self.target.0)).unsigned_abs();
                let dy = (i64::from(key.y) - i64::from(self.target.1)).unsigned_abs();
                dx.pow(2).saturating_add(dy.pow(2))
            })
    }
}
