use bitvec::prelude::*;
use std::fmt;

/// Fixed-size boolean matrix marking which cells are covered by a tile
///
/// Stored row-major in a single bit vector: cell `(x, y)` lives at bit
/// `y * width + x`. Dimensions are fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    bits: BitVec,
    width: i32,
    height: i32,
}

impl OccupancyGrid {
    /// Create a grid with every cell free
    ///
    /// Non-positive dimensions produce an empty grid in which no cell is in range.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            bits: bitvec![0; (width as usize) * (height as usize)],
            width,
            height,
        }
    }

    /// Number of columns
    pub const fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> i32 {
        self.height
    }

    /// Test whether `(x, y)` lies inside the grid
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| (y as usize) * (self.width as usize) + x as usize)
    }

    /// Read the occupied flag of a cell
    ///
    /// Cells outside the grid read as unoccupied.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.index(x, y)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test whether a tile could move onto `(x, y)`: in range and unoccupied
    pub fn is_free(&self, x: i32, y: i32) -> bool {
        self.contains(x, y) && !self.is_occupied(x, y)
    }

    /// Write the occupied flag of a cell
    ///
    /// Writes outside the grid are ignored; callers validate bounds first.
    pub fn set(&mut self, x: i32, y: i32, occupied: bool) {
        if let Some(index) = self.index(x, y) {
            self.bits.set(index, occupied);
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.bits.count_ones()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                write!(f, "{}", u8::from(self.is_occupied(x, y)))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
