//! Command-line interface: load a layout, search it, report and export the result

use crate::algorithm::board::Board;
use crate::algorithm::search::{BestFirstSearch, SearchConfig, SearchOutcome, Termination};
use crate::io::configuration::{
    CELL_PIXEL_SIZE, DEFAULT_EXPANSION_CAP, DEFAULT_SEED, GIF_FRAME_DELAY_MS, reference_board,
};
use crate::io::error::{Result, file_system_error, invalid_parameter};
use crate::io::image::export_board_as_png;
use crate::io::progress::ProgressTracker;
use crate::io::serialize::parse_layout;
use crate::io::visualization::BoardAnimation;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blockslide")]
#[command(
    author,
    version,
    about = "Explore sliding-block puzzle configurations with a bounded best-first search"
)]
/// Command-line arguments for the search tool
pub struct Cli {
    /// Layout file to search from (the reference puzzle when omitted)
    #[arg(value_name = "LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Maximum number of boards to expand
    #[arg(short, long, default_value_t = DEFAULT_EXPANSION_CAP)]
    pub cap: usize,

    /// Seed for colors of layout tiles that do not specify one
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the resulting board as a PNG image
    #[arg(short, long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Write the first expanded boards as an animated GIF
    #[arg(short, long, value_name = "PATH")]
    pub gif: Option<PathBuf>,

    /// Number of expanded boards to animate
    #[arg(short, long, default_value_t = 64)]
    pub trace: usize,

    /// Edge length of one grid cell in exported images
    #[arg(long, default_value_t = CELL_PIXEL_SIZE)]
    pub cell_size: u32,

    /// Delay between animation frames in milliseconds
    #[arg(long, default_value_t = GIF_FRAME_DELAY_MS)]
    pub frame_delay: u32,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Search configuration implied by the arguments
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            expansion_cap: self.cap,
            trace_limit: if self.gif.is_some() { self.trace } else { 0 },
        }
    }
}

/// Drives one search from parsed arguments
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Load the starting board named by the arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the layout file cannot be read, parsed or validated
    pub fn load_board(&self) -> Result<Board> {
        match &self.cli.layout {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .map_err(file_system_error(path.as_path(), "read layout"))?;
                parse_layout(&text, self.cli.seed)?.into_board()
            }
            None => reference_board(),
        }
    }

    /// Run the search and write every requested output
    ///
    /// # Errors
    ///
    /// Returns an error if loading the board or exporting images fails
    // Allow print for the result line and the run summary
    #[allow(clippy::print_stdout, clippy::print_stderr)]
    pub fn run(&self) -> Result<SearchOutcome> {
        if self.cli.trace == 0 && self.cli.gif.is_some() {
            return Err(invalid_parameter(
                "trace",
                &self.cli.trace,
                &"an animation needs at least one board",
            ));
        }

        let seed = self.load_board()?;
        let config = self.cli.search_config();

        let mut search = BestFirstSearch::new(seed, config);
        if self.cli.should_show_progress() {
            search = search.with_progress(ProgressTracker::new(config.expansion_cap));
        }
        let outcome = search.run();

        println!("{}", outcome.board);

        if !self.cli.quiet {
            let reason = match outcome.termination {
                Termination::CapReached => "expansion cap reached",
                Termination::Exhausted => "every reachable board expanded",
            };
            eprintln!(
                "{reason} after {} expansions (distance {})",
                outcome.expansions,
                outcome.board.distance()
            );
        }

        if let Some(path) = &self.cli.png {
            export_board_as_png(&outcome.board, path, self.cli.cell_size)?;
        }

        if let Some(path) = &self.cli.gif {
            let mut animation =
                BoardAnimation::new(outcome.board.width(), outcome.board.height(), self.cli.cell_size);
            for board in &outcome.trace {
                animation.push_board(board)?;
            }
            animation.export_gif(path, self.cli.frame_delay)?;
        }

        Ok(outcome)
    }
}
