/// Immutable board state and successor generation
pub mod board;
/// Distance heuristic used to order the frontier
pub mod heuristic;
/// Best-first search driver with an expansion cap
pub mod search;
