//! Error types for board construction, layout parsing and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all puzzle operations
#[derive(Debug)]
pub enum PuzzleError {
    /// Grid dimensions must both be positive
    InvalidDimensions {
        /// Requested number of columns
        width: i32,
        /// Requested number of rows
        height: i32,
    },

    /// Tile extents must both be positive
    InvalidTile {
        /// Left column of the tile
        x: i32,
        /// Bottom row of the tile
        y: i32,
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Tile footprint leaves the grid
    TileOutOfBounds {
        /// Tile position and extents as (x, y, width, height)
        tile: (i32, i32, i32, i32),
        /// Grid dimensions as (width, height)
        grid: (i32, i32),
    },

    /// Two tiles cover the same cell
    OverlappingTiles {
        /// First tile as (x, y, width, height)
        first: (i32, i32, i32, i32),
        /// Second tile as (x, y, width, height)
        second: (i32, i32, i32, i32),
        /// A cell both tiles cover
        cell: (i32, i32),
    },

    /// The same position and extent was supplied twice
    DuplicateTile {
        /// Tile as (x, y, width, height)
        tile: (i32, i32, i32, i32),
    },

    /// Layout text could not be parsed
    Parse {
        /// 1-based line number of the offending record
        line: usize,
        /// Description of what went wrong
        reason: String,
    },

    /// Search or export parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save an image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions {width}x{height}: both must be positive")
            }
            Self::InvalidTile {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Tile at ({x}, {y}) has invalid extent {width}x{height}: both must be positive"
                )
            }
            Self::TileOutOfBounds { tile, grid } => {
                let (x, y, w, h) = tile;
                write!(
                    f,
                    "Tile {w}x{h} at ({x}, {y}) does not fit in a {}x{} grid",
                    grid.0, grid.1
                )
            }
            Self::OverlappingTiles {
                first,
                second,
                cell,
            } => {
                write!(
                    f,
                    "Tiles {first:?} and {second:?} overlap at cell ({}, {})",
                    cell.0, cell.1
                )
            }
            Self::DuplicateTile { tile } => {
                write!(f, "Tile {tile:?} appears more than once")
            }
            Self::Parse { line, reason } => {
                write!(f, "Layout parse error on line {line}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a parse error for the given 1-based line
pub fn parse_error(line: usize, reason: &impl ToString) -> PuzzleError {
    PuzzleError::Parse {
        line,
        reason: reason.to_string(),
    }
}

/// Attach a path and operation to a file system failure
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
) -> impl FnOnce(std::io::Error) -> PuzzleError {
    let path = path.into();
    move |source| PuzzleError::FileSystem {
        path,
        operation,
        source,
    }
}
