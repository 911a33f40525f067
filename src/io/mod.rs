/// Command-line interface and run orchestration
pub mod cli;
/// Puzzle constants and the reference layout
pub mod configuration;
/// Error types
pub mod error;
/// PNG export of a board
pub mod image;
/// Search progress display
pub mod progress;
/// Export line and layout file formats
pub mod serialize;
/// GIF animation of board sequences
pub mod visualization;
