//! Board state: a validated tile set plus the occupancy grid derived from it
//!
//! Boards are never mutated after construction. Every constructor rebuilds the
//! occupancy grid from the tile set, and successor generation always produces
//! fresh boards, so no two boards share a grid.

use crate::algorithm::heuristic::DistanceHeuristic;
use crate::io::error::{PuzzleError, Result};
use crate::spatial::occupancy::OccupancyGrid;
use crate::spatial::tile::{Color, Direction, Tile, TileKey};
use ndarray::Array2;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A single tile stepping one cell
#[derive(Clone, Copy, Debug)]
pub struct Move {
    /// The tile before it moved
    pub tile: Tile,
    /// Direction of the step
    pub direction: Direction,
}

impl Move {
    /// The tile after it moved
    pub const fn moved(&self) -> Tile {
        self.tile.shifted(self.direction)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} tile at ({}, {}) {}",
            self.tile.width(),
            self.tile.height(),
            self.tile.x(),
            self.tile.y(),
            self.direction
        )
    }
}

/// One arrangement of non-overlapping tiles on a fixed grid
///
/// Equality and ordering use `(distance, tile keys in key order)`. Colors are
/// stored as map values and so never reach the comparison.
#[derive(Clone, Debug)]
pub struct Board {
    tiles: BTreeMap<TileKey, Color>,
    occupancy: OccupancyGrid,
    heuristic: DistanceHeuristic,
    distance: u64,
}

impl Board {
    /// Build a board scored by the default heuristic
    ///
    /// # Errors
    ///
    /// See [`Board::with_heuristic`].
    pub fn new<I>(tiles: I, width: i32, height: i32) -> Result<Self>
    where
        I: IntoIterator<Item = Tile>,
    {
        Self::with_heuristic(tiles, width, height, DistanceHeuristic::default())
    }

    /// Build a board, validating the tile set against the grid
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `width` or `height` is not positive
    /// - A tile leaves the grid
    /// - Two tiles share a position and extent
    /// - Two tiles cover the same cell
    pub fn with_heuristic<I>(
        tiles: I,
        width: i32,
        height: i32,
        heuristic: DistanceHeuristic,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Tile>,
    {
        if width <= 0 || height <= 0 {
            return Err(PuzzleError::InvalidDimensions { width, height });
        }

        let mut grid = OccupancyGrid::new(width, height);
        let mut placed: BTreeMap<TileKey, Color> = BTreeMap::new();

        for tile in tiles {
            let key = tile.key();
            if !key.fits_within(width, height) {
                return Err(PuzzleError::TileOutOfBounds {
                    tile: key.as_tuple(),
                    grid: (width, height),
                });
            }
            if placed.contains_key(&key) {
                return Err(PuzzleError::DuplicateTile {
                    tile: key.as_tuple(),
                });
            }
            if let Some(cell) = key.cells().find(|&(x, y)| grid.is_occupied(x, y)) {
                let owner = placed
                    .keys()
                    .find(|other| other.cells().any(|other_cell| other_cell == cell))
                    .copied()
                    .unwrap_or(key);
                return Err(PuzzleError::OverlappingTiles {
                    first: owner.as_tuple(),
                    second: key.as_tuple(),
                    cell,
                });
            }

            tile.stamp(&mut grid, true);
            placed.insert(key, tile.color());
        }

        Ok(Self::from_tile_map(placed, width, height, heuristic))
    }

    /// Assemble a board from a tile map already known to be valid
    fn from_tile_map(
        tiles: BTreeMap<TileKey, Color>,
        width: i32,
        height: i32,
        heuristic: DistanceHeuristic,
    ) -> Self {
        let occupancy = Self::rebuild_occupancy(&tiles, width, height);
        let distance = heuristic.distance(tiles.keys().copied());
        Self {
            tiles,
            occupancy,
            heuristic,
            distance,
        }
    }

    fn rebuild_occupancy(
        tiles: &BTreeMap<TileKey, Color>,
        width: i32,
        height: i32,
    ) -> OccupancyGrid {
        let mut grid = OccupancyGrid::new(width, height);
        for (&key, &color) in tiles {
            Tile::from_parts(key, color).stamp(&mut grid, true);
        }
        grid
    }

    /// Number of columns
    pub const fn width(&self) -> i32 {
        self.occupancy.width()
    }

    /// Number of rows
    pub const fn height(&self) -> i32 {
        self.occupancy.height()
    }

    /// Number of tiles on the board
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Tiles in key order
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles
            .iter()
            .map(|(&key, &color)| Tile::from_parts(key, color))
    }

    /// Tile keys in key order
    pub fn keys(&self) -> impl Iterator<Item = TileKey> + '_ {
        self.tiles.keys().copied()
    }

    /// Tile covering `(x, y)`, if any
    pub fn tile_at(&self, x: i32, y: i32) -> Option<Tile> {
        if !self.occupancy.is_occupied(x, y) {
            return None;
        }
        self.tiles().find(|tile| tile.cells().any(|cell| cell == (x, y)))
    }

    /// Occupancy grid derived from the tile set
    pub const fn occupancy(&self) -> &OccupancyGrid {
        &self.occupancy
    }

    /// Heuristic this board was scored with
    pub const fn heuristic(&self) -> DistanceHeuristic {
        self.heuristic
    }

    /// Heuristic distance of the tracked tile
    pub const fn distance(&self) -> u64 {
        self.distance
    }

    /// Every board reachable by moving one tile one cell, with the move taken
    ///
    /// Each tile's moves are checked against this board's occupancy with the
    /// tile's own footprint excluded. The moved tile keeps its color.
    pub fn moves(&self) -> Vec<(Move, Self)> {
        let mut result = Vec::new();

        for tile in self.tiles() {
            for (direction, moved) in tile.possible_moves(&self.occupancy) {
                let mut tiles = self.tiles.clone();
                tiles.remove(&tile.key());
                tiles.insert(moved.key(), tile.color());

                let board = Self::from_tile_map(tiles, self.width(), self.height(), self.heuristic);
                result.push((Move { tile, direction }, board));
            }
        }

        result
    }

    /// Every board reachable by moving one tile one cell
    pub fn successors(&self) -> Vec<Self> {
        self.moves().into_iter().map(|(_, board)| board).collect()
    }

    /// Per-cell tile colors indexed `[y, x]`, `None` for free cells
    pub fn color_map(&self) -> Array2<Option<Color>> {
        let rows = self.height() as usize;
        let cols = self.width() as usize;
        let mut map = Array2::from_elem((rows, cols), None);

        for tile in self.tiles() {
            for (x, y) in tile.cells() {
                if let Some(cell) = map.get_mut([y as usize, x as usize]) {
                    *cell = Some(tile.color());
                }
            }
        }

        map
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Board {}

impl PartialOrd for Board {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Board {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.tiles.keys().cmp(other.tiles.keys()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::io::serialize::serialize_board(self))
    }
}
