//! Sliding-block puzzle exploration with a bounded best-first search
//!
//! Rectangular tiles occupy disjoint cells of a fixed grid and slide one cell
//! per move. Boards are immutable values; the search driver walks the graph of
//! boards reachable from a starting layout, ordered by a distance heuristic.

#![forbid(unsafe_code)]

/// Board state, successor generation, heuristic and the search driver
pub mod algorithm;
/// Input/output: errors, configuration, text forms, images and the CLI
pub mod io;
/// Occupancy grid and tile primitives
pub mod spatial;

pub use algorithm::board::Board;
pub use algorithm::search::{SearchConfig, SearchOutcome, Termination, search};
pub use io::error::{PuzzleError, Result};
pub use spatial::tile::{Color, Direction, Tile};
