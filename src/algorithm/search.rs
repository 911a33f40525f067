use crate::algorithm::board::Board;
use crate::io::configuration::{DEFAULT_EXPANSION_CAP, DEFAULT_TRACE_LIMIT};
use crate::io::progress::ProgressTracker;
use std::collections::{BTreeSet, BinaryHeap};

/// Limits and capture settings for one search run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of boards expanded before stopping
    pub expansion_cap: usize,
    /// Number of expanded boards to keep, in expansion order
    pub trace_limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            expansion_cap: DEFAULT_EXPANSION_CAP,
            trace_limit: DEFAULT_TRACE_LIMIT,
        }
    }
}

impl SearchConfig {
    /// Default configuration with a different cap
    pub fn with_cap(expansion_cap: usize) -> Self {
        Self {
            expansion_cap,
            ..Self::default()
        }
    }
}

/// Why a search run stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The expansion cap was hit; the result is the frontier top
    CapReached,
    /// Every reachable board was expanded; the result is the last expanded board
    Exhausted,
}

/// Result of one search run
#[derive(Clone, Debug)]
pub struct SearchOutcome {
    /// Representative result board
    pub board: Board,
    /// Boards removed from the frontier and expanded
    pub expansions: usize,
    /// Why the run stopped
    pub termination: Termination,
    /// The first expanded boards, up to the configured trace limit
    pub trace: Vec<Board>,
    /// Size of the visited set at the end of the run
    pub visited: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

/// Best-first exploration of the board graph
///
/// The frontier always yields its maximum board first under the board
/// ordering. Boards already in the frontier may be pushed again; duplicates
/// are discarded when popped, not when pushed. Only boards that are actually
/// expanded count towards the cap.
pub struct BestFirstSearch {
    frontier: BinaryHeap<Board>,
    visited: BTreeSet<Board>,
    config: SearchConfig,
    expansions: usize,
    last_expanded: Board,
    trace: Vec<Board>,
    max_frontier: usize,
    progress: Option<ProgressTracker>,
}

impl BestFirstSearch {
    /// Seed a search with its starting board
    pub fn new(seed: Board, config: SearchConfig) -> Self {
        let mut frontier = BinaryHeap::new();
        frontier.push(seed.clone());

        Self {
            frontier,
            visited: BTreeSet::new(),
            config,
            expansions: 0,
            last_expanded: seed,
            trace: Vec::with_capacity(config.trace_limit.min(1 << 16)),
            max_frontier: 1,
            progress: None,
        }
    }

    /// Report expansion counts through `tracker` while running
    #[must_use]
    pub fn with_progress(mut self, tracker: ProgressTracker) -> Self {
        self.progress = Some(tracker);
        self
    }

    /// Number of boards expanded so far
    pub const fn expansions(&self) -> usize {
        self.expansions
    }

    /// Number of entries currently in the frontier, duplicates included
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Test whether `board` has already been expanded
    pub fn is_visited(&self, board: &Board) -> bool {
        self.visited.contains(board)
    }

    /// Expand the next unvisited board in the frontier
    ///
    /// Pops and discards already-visited boards until an unvisited one turns
    /// up. Returns `false` once the frontier is empty.
    pub fn execute_iteration(&mut self) -> bool {
        let current = loop {
            match self.frontier.pop() {
                None => return false,
                Some(board) if self.visited.contains(&board) => {}
                Some(board) => break board,
            }
        };

        for successor in current.successors() {
            if !self.visited.contains(&successor) {
                self.frontier.push(successor);
            }
        }
        self.max_frontier = self.max_frontier.max(self.frontier.len());

        if self.trace.len() < self.config.trace_limit {
            self.trace.push(current.clone());
        }
        self.visited.insert(current.clone());
        self.last_expanded = current;
        self.expansions += 1;

        if let Some(progress) = &self.progress {
            progress.update(self.expansions, self.frontier.len());
        }

        true
    }

    /// Run until the cap is reached or the frontier runs dry
    pub fn run(mut self) -> SearchOutcome {
        let mut termination = Termination::CapReached;
        while self.expansions < self.config.expansion_cap {
            if !self.execute_iteration() {
                termination = Termination::Exhausted;
                break;
            }
        }

        let board = match termination {
            Termination::CapReached => self.frontier.pop().unwrap_or(self.last_expanded),
            Termination::Exhausted => self.last_expanded,
        };

        let outcome = SearchOutcome {
            board,
            expansions: self.expansions,
            termination,
            trace: self.trace,
            visited: self.visited.len(),
            max_frontier: self.max_frontier,
        };

        if let Some(progress) = &self.progress {
            progress.finish(&outcome);
        }

        outcome
    }
}

/// Run a best-first search from `seed` with the given expansion cap
pub fn search(seed: Board, expansion_cap: usize) -> SearchOutcome {
    BestFirstSearch::new(seed, SearchConfig::with_cap(expansion_cap)).run()
}
