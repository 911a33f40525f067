//! Puzzle constants and runtime configuration defaults

use crate::algorithm::board::Board;
use crate::io::error::Result;
use crate::spatial::tile::{Color, Tile, TileKey};

// Search limits
/// Maximum number of boards expanded by one search run
pub const DEFAULT_EXPANSION_CAP: usize = 1_000_000;

/// Expanded boards kept for animation by default
pub const DEFAULT_TRACE_LIMIT: usize = 0;

/// Expansions between progress display refreshes
pub const PROGRESS_REFRESH_STRIDE: usize = 1_024;

// Heuristic defaults for the reference puzzle
/// Extent `(width, height)` of the tile tracked by the distance heuristic
pub const DEFAULT_HEURISTIC_SHAPE: (i32, i32) = (2, 2);
/// Position `(x, y)` the tracked tile is measured against
pub const DEFAULT_HEURISTIC_TARGET: (i32, i32) = (2, 2);

// Reference puzzle grid: 4 columns by 5 rows
/// Columns of the reference puzzle
pub const REFERENCE_WIDTH: i32 = 4;
/// Rows of the reference puzzle
pub const REFERENCE_HEIGHT: i32 = 5;

/// Fixed seed for colors assigned to uncolored layout tiles
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Edge length of one grid cell in exported images, in pixels
pub const CELL_PIXEL_SIZE: u32 = 48;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 250;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;
/// Background color drawn between cells
pub const GRID_LINE_COLOR: [u8; 3] = [26, 26, 26];
/// Color of cells no tile covers
pub const EMPTY_CELL_COLOR: [u8; 3] = [64, 64, 64];

const FRAME_COLOR: [u8; 3] = [109, 126, 182];
const TARGET_COLOR: [u8; 3] = [205, 181, 109];
const SQUARE_COLOR: [u8; 3] = [6, 42, 139];

/// The nine tiles of the reference puzzle
pub fn reference_tiles() -> Vec<Tile> {
    let layout: [(i32, i32, i32, i32, [u8; 3]); 9] = [
        (0, 0, 2, 1, FRAME_COLOR),
        (2, 0, 1, 2, FRAME_COLOR),
        (0, 4, 2, 1, FRAME_COLOR),
        (2, 4, 2, 1, FRAME_COLOR),
        (2, 2, 2, 2, TARGET_COLOR),
        (0, 2, 1, 1, SQUARE_COLOR),
        (0, 3, 1, 1, SQUARE_COLOR),
        (1, 2, 1, 1, SQUARE_COLOR),
        (1, 3, 1, 1, SQUARE_COLOR),
    ];

    layout
        .into_iter()
        .map(|(x, y, width, height, [r, g, b])| {
            Tile::from_parts(
                TileKey {
                    x,
                    y,
                    width,
                    height,
                },
                Color::from_rgb8(r, g, b),
            )
        })
        .collect()
}

/// The reference puzzle as a board with the default heuristic
///
/// # Errors
///
/// Propagates board validation failures; the reference layout is valid.
pub fn reference_board() -> Result<Board> {
    Board::new(reference_tiles(), REFERENCE_WIDTH, REFERENCE_HEIGHT)
}
