//! Frame capture and GIF generation for board sequences

use crate::algorithm::board::Board;
use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;
use crate::io::error::{PuzzleError, Result, file_system_error, invalid_parameter};
use crate::io::image::render_board;
use image::{Delay, Frame, RgbaImage};
use std::path::Path;

/// Collects rendered boards for export as an animation
///
/// Plays the same role as a frame-by-frame viewer cycling through search
/// results: one frame per pushed board, in push order.
pub struct BoardAnimation {
    frames: Vec<RgbaImage>,
    width: i32,
    height: i32,
    cell_size: u32,
}

impl BoardAnimation {
    /// Create an empty animation for boards of the given grid size
    pub const fn new(width: i32, height: i32, cell_size: u32) -> Self {
        Self {
            frames: Vec::new(),
            width,
            height,
            cell_size,
        }
    }

    /// Render and append a board
    ///
    /// # Errors
    ///
    /// Returns an error if the board's grid differs from the animation's or the
    /// rendered frame would be too large
    pub fn push_board(&mut self, board: &Board) -> Result<()> {
        if board.width() != self.width || board.height() != self.height {
            return Err(invalid_parameter(
                "board",
                &format!("{}x{}", board.width(), board.height()),
                &format!("animation frames are {}x{}", self.width, self.height),
            ));
        }
        self.frames.push(render_board(board, self.cell_size)?);
        Ok(())
    }

    /// Number of captured frames
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Export the captured frames as a looping GIF
    ///
    /// Delays below what viewers support are raised to the viewer minimum and
    /// intermediate frames are dropped to keep the apparent speed. The last
    /// frame is held longer.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No frames were captured
    /// - `frame_delay_ms` is zero
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.frames.is_empty() {
            return Err(invalid_parameter(
                "frames",
                &0,
                &"no boards captured for the animation",
            ));
        }
        if frame_delay_ms == 0 {
            return Err(invalid_parameter(
                "frame_delay_ms",
                &frame_delay_ms,
                &"must be positive",
            ));
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms).max(1) as usize;
        let frames = self.encode_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(file_system_error(parent, "create directory"))?;
        }

        let file = std::fs::File::create(output_path)
            .map_err(file_system_error(output_path, "create file"))?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .set_repeat(image::codecs::gif::Repeat::Infinite)
            .and_then(|()| encoder.encode_frames(frames))
            .map_err(|e| PuzzleError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    fn encode_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let delay = Delay::from_numer_denom_ms(delay_ms, 1);
        let mut frames: Vec<Frame> = self
            .frames
            .iter()
            .step_by(skip_factor)
            .map(|img| Frame::from_parts(img.clone(), 0, 0, delay))
            .collect();

        // The sampled frames may have skipped the final board
        if (self.frames.len() - 1) % skip_factor != 0 {
            if let Some(last) = self.frames.last() {
                frames.push(Frame::from_parts(last.clone(), 0, 0, delay));
            }
        }

        if let Some(last) = frames.last().map(|frame| frame.buffer().clone()) {
            frames.push(Frame::from_parts(
                last,
                0,
                0,
                Delay::from_numer_denom_ms(delay_ms * 8, 1),
            ));
        }

        frames
    }
}
