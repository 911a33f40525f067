//! PNG export of a single board

use crate::algorithm::board::Board;
use crate::io::configuration::{EMPTY_CELL_COLOR, GRID_LINE_COLOR};
use crate::io::error::{PuzzleError, Result, file_system_error, invalid_parameter};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Paint a board with `cell_size` pixels per cell
///
/// Row `y = height - 1` is drawn at the top. Each cell keeps a one-pixel
/// border in the grid line color so adjacent tiles stay distinguishable.
///
/// # Errors
///
/// Returns an error if the image dimensions do not fit in `u32`
pub fn render_board(board: &Board, cell_size: u32) -> Result<RgbaImage> {
    let colors = board.color_map();
    let (rows, cols) = colors.dim();
    let scaled = |count: usize| {
        u32::try_from(count)
            .ok()
            .and_then(|count| count.checked_mul(cell_size))
    };
    let dimensions = scaled(cols).zip(scaled(rows)).filter(|&(w, h)| {
        u64::from(w)
            .checked_mul(u64::from(h))
            .and_then(|pixels| pixels.checked_mul(4))
            .is_some_and(|bytes| usize::try_from(bytes).is_ok())
    });
    let Some((image_width, image_height)) = dimensions else {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &format!("a {cols}x{rows} board image would not fit in memory"),
        ));
    };
    let mut img = RgbaImage::from_pixel(image_width, image_height, opaque(GRID_LINE_COLOR));

    for ((row, col), cell) in colors.indexed_iter() {
        let fill = cell.map_or(EMPTY_CELL_COLOR, |color| color.to_rgb8());
        // Array rows count up from y = 0; image rows count down from the top
        let top = (rows - 1 - row) as u32 * cell_size;
        let left = col as u32 * cell_size;

        for dy in 1..cell_size.saturating_sub(1) {
            for dx in 1..cell_size.saturating_sub(1) {
                img.put_pixel(left + dx, top + dy, opaque(fill));
            }
        }
    }

    Ok(img)
}

const fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Export a board as a PNG image
///
/// # Errors
///
/// Returns an error if:
/// - `cell_size` is smaller than 3 pixels or too large for the image size
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &Path, cell_size: u32) -> Result<()> {
    if cell_size < 3 {
        return Err(invalid_parameter(
            "cell_size",
            &cell_size,
            &"cells need at least one interior pixel",
        ));
    }

    let img = render_board(board, cell_size)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
