//! Text forms of boards: the one-line export and the layout file format
//!
//! Export line: every tile as `x y width height r g b;`, tiles in key order,
//! separated by a single space. The line ends at the last tile's `;` with no
//! trailing space, so it differs from a per-tile `"; "` writer only in that
//! final byte. Color channels are scaled to `[0, 255]` and truncated.
//!
//! Layout files start with a `width height` record followed by tile records
//! `x y width height [r g b]`. Records end at `;` or a newline and `#` starts a
//! comment. Tiles without a color get one from a seeded generator.

use crate::algorithm::board::Board;
use crate::io::error::{Result, parse_error};
use crate::spatial::tile::{Color, Tile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Render a board as a single export line
pub fn serialize_board(board: &Board) -> String {
    board
        .tiles()
        .map(|tile| tile.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Initial configuration read from a layout file
#[derive(Clone, Debug)]
pub struct Layout {
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
    /// Tiles in file order
    pub tiles: Vec<Tile>,
}

impl Layout {
    /// Validate the layout into a board scored by the default heuristic
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles overlap or leave the grid
    pub fn into_board(self) -> Result<Board> {
        Board::new(self.tiles, self.width, self.height)
    }
}

/// Split text into `(line number, record)` pairs, dropping comments and blanks
fn records(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().flat_map(|(index, line)| {
        let content = line.split('#').next().unwrap_or_default();
        content
            .split(';')
            .map(str::trim)
            .filter(|record| !record.is_empty())
            .map(move |record| (index + 1, record))
    })
}

fn parse_fields(line: usize, record: &str) -> Result<Vec<i32>> {
    record
        .split_whitespace()
        .map(|field| {
            field
                .parse::<i32>()
                .map_err(|error| parse_error(line, &format!("'{field}' is not an integer: {error}")))
        })
        .collect()
}

fn channel(line: usize, value: i32) -> Result<u8> {
    u8::try_from(value)
        .map_err(|_overflow| parse_error(line, &format!("color channel {value} is outside 0..=255")))
}

fn tile_from_fields(line: usize, fields: &[i32], rng: Option<&mut StdRng>) -> Result<Tile> {
    let (geometry, color) = match (fields, rng) {
        ([x, y, w, h, r, g, b], _) => (
            [*x, *y, *w, *h],
            Color::from_rgb8(channel(line, *r)?, channel(line, *g)?, channel(line, *b)?),
        ),
        ([x, y, w, h], Some(rng)) => (
            [*x, *y, *w, *h],
            Color::from_rgb8(rng.random(), rng.random(), rng.random()),
        ),
        _ => {
            return Err(parse_error(
                line,
                &format!("expected a tile record, found {} fields", fields.len()),
            ));
        }
    };

    let [x, y, width, height] = geometry;
    Tile::new(x, y, width, height, color).map_err(|error| parse_error(line, &error))
}

/// Parse a layout file
///
/// # Errors
///
/// Returns a parse error if the dimension record is missing or malformed, or a
/// tile record does not have four or seven integer fields
pub fn parse_layout(text: &str, seed: u64) -> Result<Layout> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut entries = records(text);

    let (width, height) = match entries.next() {
        Some((line, record)) => match parse_fields(line, record)?.as_slice() {
            [width, height] => (*width, *height),
            fields => {
                return Err(parse_error(
                    line,
                    &format!("expected 'width height', found {} fields", fields.len()),
                ));
            }
        },
        None => return Err(parse_error(1, &"layout is empty")),
    };

    let mut tiles = Vec::new();
    for (line, record) in entries {
        let fields = parse_fields(line, record)?;
        tiles.push(tile_from_fields(line, &fields, Some(&mut rng))?);
    }

    Ok(Layout {
        width,
        height,
        tiles,
    })
}

/// Parse an export line back into a board on a `width` x `height` grid
///
/// # Errors
///
/// Returns an error if a record does not have seven integer fields or the
/// tiles do not form a valid board
pub fn parse_board_line(text: &str, width: i32, height: i32) -> Result<Board> {
    let tiles = records(text)
        .map(|(line, record)| {
            let fields = parse_fields(line, record)?;
            tile_from_fields(line, &fields, None)
        })
        .collect::<Result<Vec<_>>>()?;

    Board::new(tiles, width, height)
}
