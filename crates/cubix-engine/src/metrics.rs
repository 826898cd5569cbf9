//! Cumulative counters for one game.
//!
//! [`GameMetrics`] is reset by [`Game::start`](crate::Game::start) and
//! updated by every [`place_mark`](crate::Game::place_mark) call, giving
//! front ends and benchmarks visibility into traversal cost.

use cubix_space::LineScan;

/// Counters collected since the current game started.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GameMetrics {
    /// Marks accepted onto the surface.
    pub placements: u64,
    /// Placements rejected because the cell was already marked.
    pub rejected_occupied: u64,
    /// Cursor advances performed by run scans.
    pub cursor_steps: u64,
    /// Directional walks that ended by crossing a cube corner.
    pub corner_terminations: u64,
    /// Runs that closed a full loop around the cube.
    pub closed_loops: u64,
    /// Wall-clock time of the most recent placement scan, in microseconds.
    pub last_scan_us: u64,
}

impl GameMetrics {
    /// Fold the outcome of one run scan into the counters.
    pub(crate) fn record_scan(&mut self, scan: &LineScan, elapsed_us: u64) {
        self.placements += 1;
        self.cursor_steps += u64::from(scan.steps());
        for run in scan.runs() {
            if run.is_closed() {
                self.closed_loops += 1;
            }
            self.corner_terminations += u64::from(run.forward.corner);
            if let Some(back) = run.backward {
                self.corner_terminations += u64::from(back.corner);
            }
        }
        self.last_scan_us = elapsed_us;
    }
}
