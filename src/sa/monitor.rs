//! Progress observation for SA runs.
//!
//! The runner owns no output. It hands a [`SaProgress`] snapshot to a
//! [`ProgressObserver`] once when the search starts, then at most once per
//! [`SaConfig::report_interval`](super::SaConfig::report_interval), and once
//! more when it finishes.

use std::time::Duration;

/// Snapshot of a running search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaProgress {
    /// Wall-clock time since the search started.
    pub elapsed: Duration,

    /// Elapsed share of the search window, in `[0, 1]`.
    pub fraction: f64,

    /// Neighbors evaluated so far.
    pub iterations: usize,

    /// Energy of the current state of the walk.
    pub current_cost: f64,

    /// Lowest energy seen so far.
    pub best_cost: f64,

    /// Current temperature.
    pub temperature: f64,
}

/// Receives progress reports from [`SaRunner`](super::SaRunner).
pub trait ProgressObserver {
    /// Called at the start and then at bounded frequency during the search.
    fn on_progress(&mut self, progress: &SaProgress);

    /// Called once after the search loop exits.
    fn on_finish(&mut self, progress: &SaProgress) {
        self.on_progress(progress);
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpObserver;

impl ProgressObserver for NoOpObserver {
    fn on_progress(&mut self, _progress: &SaProgress) {}
}

/// Observer that keeps every report it receives.
#[derive(Debug, Clone, Default)]
pub struct HistoryRecorder {
    pub reports: Vec<SaProgress>,
    pub finished: Option<SaProgress>,
}

impl HistoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressObserver for HistoryRecorder {
    fn on_progress(&mut self, progress: &SaProgress) {
        self.reports.push(*progress);
    }

    fn on_finish(&mut self, progress: &SaProgress) {
        self.finished = Some(*progress);
    }
}
