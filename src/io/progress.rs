//! Expansion-count progress display for long search runs

use crate::algorithm::search::{SearchOutcome, Termination};
use crate::io::configuration::PROGRESS_REFRESH_STRIDE;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;

static EXPANSION_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Expanded: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Diagnostic display of how many boards a search has expanded
///
/// Only refreshes every [`PROGRESS_REFRESH_STRIDE`] expansions so the hot
/// loop stays cheap. Has no influence on the search itself.
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    /// Create a tracker drawing to stderr, sized to the expansion cap
    pub fn new(expansion_cap: usize) -> Self {
        let bar = ProgressBar::new(expansion_cap as u64);
        bar.set_style(EXPANSION_STYLE.clone());
        Self { bar }
    }

    /// Create a tracker that records progress without drawing anything
    pub fn hidden(expansion_cap: usize) -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(expansion_cap as u64),
            ProgressDrawTarget::hidden(),
        );
        Self { bar }
    }

    /// Record the current expansion count and frontier size
    pub fn update(&self, expansions: usize, frontier_len: usize) {
        if expansions % PROGRESS_REFRESH_STRIDE == 0 {
            self.bar.set_position(expansions as u64);
            self.bar.set_message(format!("frontier {frontier_len}"));
        }
    }

    /// Last recorded expansion count
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Close the display with a one-line summary of the run
    pub fn finish(&self, outcome: &SearchOutcome) {
        let reason = match outcome.termination {
            Termination::CapReached => "cap reached",
            Termination::Exhausted => "state space exhausted",
        };
        self.bar.set_position(outcome.expansions as u64);
        self.bar.finish_with_message(format!(
            "{reason}: {} boards visited, peak frontier {}",
            outcome.visited, outcome.max_frontier
        ));
    }
}
