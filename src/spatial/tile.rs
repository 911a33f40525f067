//! Positioned rectangular tiles and their single-step moves
//!
//! A tile's identity is its [`TileKey`]: position plus extent. The color is
//! carried alongside for rendering and is not part of the key.

use crate::io::error::{PuzzleError, Result};
use crate::spatial::occupancy::OccupancyGrid;
use std::fmt;

/// One of the four unit steps a tile can take
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger `y`
    Up,
    /// Towards smaller `y`
    Down,
    /// Towards larger `x`
    Right,
    /// Towards smaller `x`
    Left,
}

impl Direction {
    /// All directions in move enumeration order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Unit offset as `(dx, dy)`
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (0, 1),
            Self::Down => (0, -1),
            Self::Right => (1, 0),
            Self::Left => (-1, 0),
        }
    }

    /// The direction that undoes this one
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Right => Self::Left,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}

/// RGB color with channels in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Create a color from unit-range channels
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit channels
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
        }
    }

    /// Scale to `[0, 255]` and truncate each channel
    pub fn to_rgb8(self) -> [u8; 3] {
        // `as` saturates out-of-range channels
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(0.5, 0.5, 0.5)
    }
}

/// Identity of a tile: position of its lowest-left cell plus its extent
///
/// Ordering is lexicographic over `(x, y, width, height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TileKey {
    /// Leftmost column
    pub x: i32,
    /// Lowest row
    pub y: i32,
    /// Number of columns covered
    pub width: i32,
    /// Number of rows covered
    pub height: i32,
}

impl TileKey {
    /// Bundle as `(x, y, width, height)` for error reporting
    pub const fn as_tuple(self) -> (i32, i32, i32, i32) {
        (self.x, self.y, self.width, self.height)
    }

    /// Iterate over every covered cell as `(x, y)`
    ///
    /// Extents reaching past `i32::MAX` are clipped there.
    pub fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.y..self.y.saturating_add(self.height)).flat_map(move |y| {
            (self.x..self.x.saturating_add(self.width)).map(move |x| (x, y))
        })
    }

    /// Test whether the footprint lies inside a `width` x `height` grid
    pub const fn fits_within(self, width: i32, height: i32) -> bool {
        let (Some(right), Some(top)) = (
            self.x.checked_add(self.width),
            self.y.checked_add(self.height),
        ) else {
            return false;
        };
        self.x >= 0 && self.y >= 0 && right <= width && top <= height
    }

    /// Same extent moved one cell in `direction`
    #[must_use]
    pub const fn shifted(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// Cells the tile would newly cover after moving in `direction`
    fn leading_edge(self, direction: Direction) -> impl Iterator<Item = (i32, i32)> {
        let Self {
            x,
            y,
            width,
            height,
        } = self;
        let right = x.saturating_add(width);
        let top = y.saturating_add(height);
        let (columns, rows) = match direction {
            Direction::Up => (x..right, top..top.saturating_add(1)),
            Direction::Down => (x..right, y.saturating_sub(1)..y),
            Direction::Right => (right..right.saturating_add(1), y..top),
            Direction::Left => (x.saturating_sub(1)..x, y..top),
        };
        rows.flat_map(move |row| columns.clone().map(move |column| (column, row)))
    }
}

/// A positioned rectangle with a cosmetic color
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    key: TileKey,
    color: Color,
}

impl Tile {
    /// Create a tile, rejecting non-positive extents
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidTile`] if `width` or `height` is not positive
    pub fn new(x: i32, y: i32, width: i32, height: i32, color: Color) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(PuzzleError::InvalidTile {
                x,
                y,
                width,
                height,
            });
        }
        Ok(Self {
            key: TileKey {
                x,
                y,
                width,
                height,
            },
            color,
        })
    }

    pub(crate) const fn from_parts(key: TileKey, color: Color) -> Self {
        Self { key, color }
    }

    /// Identity key
    pub const fn key(&self) -> TileKey {
        self.key
    }

    /// Cosmetic color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Leftmost column
    pub const fn x(&self) -> i32 {
        self.key.x
    }

    /// Lowest row
    pub const fn y(&self) -> i32 {
        self.key.y
    }

    /// Number of columns covered
    pub const fn width(&self) -> i32 {
        self.key.width
    }

    /// Number of rows covered
    pub const fn height(&self) -> i32 {
        self.key.height
    }

    /// Iterate over every covered cell as `(x, y)`
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        self.key.cells()
    }

    /// Copy of this tile moved one cell in `direction`, color preserved
    #[must_use]
    pub const fn shifted(&self, direction: Direction) -> Self {
        Self {
            key: self.key.shifted(direction),
            color: self.color,
        }
    }

    /// Write this tile's footprint into `grid`
    pub fn stamp(&self, grid: &mut OccupancyGrid, occupied: bool) {
        for (x, y) in self.cells() {
            grid.set(x, y, occupied);
        }
    }

    /// Enumerate the legal single-step moves of this tile
    ///
    /// A direction is legal when every cell along the leading edge is inside
    /// the grid and unoccupied. The tile's own footprint is cleared in a
    /// scratch copy first, so `grid` itself is left untouched.
    pub fn possible_moves(&self, grid: &OccupancyGrid) -> Vec<(Direction, Self)> {
        let mut scratch = grid.clone();
        self.stamp(&mut scratch, false);

        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                self.key
                    .leading_edge(direction)
                    .all(|(x, y)| scratch.is_free(x, y))
            })
            .map(|direction| (direction, self.shifted(direction)))
            .collect()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.color.to_rgb8();
        write!(
            f,
            "{} {} {} {} {r} {g} {b};",
            self.key.x, self.key.y, self.key.width, self.key.height
        )
    }
}
