//! Solve metrics, reporting and solver comparison.
//!
//! Every solve produces a [`Metrics`] value: wall time, peak memory,
//! solution size, the normalized quality score and, for the exact
//! solver, the number of search-tree nodes visited.
//!
//! `quality = 1 - |solution| / |intervals|`, defined as `0` when the
//! instance has no intervals.

mod compare;
mod probe;
mod record;
mod report;

pub use compare::{compare_all, Comparison};
pub use probe::{ResourceProbe, SystemProbe};
pub use record::{write_csv, MetricsRecord};
pub use report::{render_report, render_uncoverable};

use std::time::{Duration, Instant};

/// Measurements for one solver run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metrics {
    /// Wall time between the probe readings taken around the solve.
    pub elapsed: Duration,

    /// Process peak RSS after the solve, in kilobytes.
    pub peak_memory_kb: Option<u64>,

    /// Number of selected intervals. `None` when no cover was produced
    /// (exact solver), so "no solution" never reads as size 0.
    pub solution_size: Option<usize>,

    /// `1 - size / total_intervals`, `0.0` without a size or intervals.
    pub quality: f64,

    /// Search-tree nodes visited; exact solver only.
    pub nodes_visited: Option<u64>,
}

impl Metrics {
    /// Closes a measurement started at `started`.
    pub(crate) fn finish<P: ResourceProbe + ?Sized>(
        probe: &P,
        started: Instant,
        solution_size: Option<usize>,
        total_intervals: usize,
        nodes_visited: Option<u64>,
    ) -> Self {
        let elapsed = probe.now().saturating_duration_since(started);
        Self {
            elapsed,
            peak_memory_kb: probe.peak_memory_kb(),
            solution_size,
            quality: solution_size.map_or(0.0, |size| quality(size, total_intervals)),
            nodes_visited,
        }
    }

    pub fn time_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Normalized quality score `1 - solution_size / total_intervals`.
///
/// ```
/// use interval_cover::metrics::quality;
///
/// assert_eq!(quality(2, 8), 0.75);
/// assert_eq!(quality(0, 0), 0.0);
/// ```
pub fn quality(solution_size: usize, total_intervals: usize) -> f64 {
    if total_intervals == 0 {
        0.0
    } else {
        1.0 - solution_size as f64 / total_intervals as f64
    }
}
