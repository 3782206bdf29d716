//! Greedy selection loop.

use super::config::GreedyConfig;
use crate::coverage::CoverageMask;
use crate::error::{reserve_buffer, CoverError};
use crate::metrics::{Metrics, ResourceProbe, SystemProbe};
use crate::model::{Interval, Point, Problem, Solution};
use crate::ordering::{sorted_intervals, sorted_points};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Result of a greedy solve.
#[derive(Debug, Clone)]
pub struct GreedyResult {
    /// Intervals in selection order. `solution.covered` is `false` when
    /// the loop stopped on an uncoverable point.
    pub solution: Solution,

    /// The anchor point no interval contains, if the loop stopped on one.
    pub uncoverable: Option<Point>,

    /// A solver buffer could not be allocated; no selection was made.
    pub allocation_failed: bool,

    pub metrics: Metrics,
}

impl GreedyResult {
    pub fn is_covered(&self) -> bool {
        self.solution.covered
    }
}

/// Index of the best interval containing `anchor`, if any.
///
/// Highest gain wins; equal gains prefer the shorter interval, then the
/// earlier index.
fn best_candidate(
    mask: &CoverageMask<'_>,
    anchor: &Point,
    intervals: &[Interval],
) -> Option<usize> {
    let mut best: Option<(usize, usize, i64)> = None;

    for (index, interval) in intervals.iter().enumerate() {
        if !interval.contains(anchor) {
            continue;
        }
        let gain = mask.gain(interval);
        let length = interval.length();
        let better = match best {
            None => true,
            Some((_, best_gain, best_length)) => {
                gain > best_gain || (gain == best_gain && length < best_length)
            }
        };
        if better {
            best = Some((index, gain, length));
        }
    }

    best.map(|(index, _, _)| index)
}

struct GreedyOutcome {
    selected: Vec<Interval>,
    covered: bool,
    stuck_at: Option<Point>,
}

fn select(problem: &Problem, config: &GreedyConfig) -> Result<GreedyOutcome, CoverError> {
    let intervals = sorted_intervals(problem.intervals(), config.interval_order)?;
    let points = sorted_points(problem.points(), config.point_order)?;
    let mut selected = reserve_buffer("greedy solution", intervals.len())?;
    let mut mask = CoverageMask::try_new(&points)?;
    let mut stuck_at = None;

    while let Some(anchor_index) = mask.first_uncovered() {
        let anchor = points[anchor_index];
        let Some(index) = best_candidate(&mask, &anchor, &intervals) else {
            stuck_at = Some(anchor);
            break;
        };
        let interval = intervals[index];
        let newly = mask.mark(&interval);
        selected.push(interval);
        debug!(
            event = "greedy_pick",
            anchor = anchor.position,
            start = interval.start,
            end = interval.end,
            newly_covered = newly,
            covered = mask.covered_count(),
        );
    }

    Ok(GreedyOutcome {
        selected,
        covered: mask.is_complete(),
        stuck_at,
    })
}

/// Executes the greedy heuristic.
///
/// # Usage
///
/// ```
/// use interval_cover::greedy::{GreedyConfig, GreedyRunner};
/// use interval_cover::model::Problem;
///
/// let problem = Problem::from_positions(&[5, 10, 15], &[(0, 12), (8, 22), (15, 28)]);
/// let result = GreedyRunner::run(&problem, &GreedyConfig::default());
/// assert!(result.is_covered());
/// assert_eq!(result.solution.len(), 2);
/// ```
pub struct GreedyRunner;

impl GreedyRunner {
    /// Runs the heuristic, timing it with [`SystemProbe`].
    pub fn run(problem: &Problem, config: &GreedyConfig) -> GreedyResult {
        Self::run_with_probe(problem, config, &SystemProbe)
    }

    /// Runs the heuristic with a caller-supplied clock and memory probe.
    pub fn run_with_probe<P: ResourceProbe + ?Sized>(
        problem: &Problem,
        config: &GreedyConfig,
        probe: &P,
    ) -> GreedyResult {
        let started = probe.now();
        info!(
            event = "solve_start",
            solver = "greedy",
            points = problem.point_count(),
            intervals = problem.interval_count(),
        );

        let outcome = match select(problem, config) {
            Ok(outcome) => outcome,
            Err(e) => return aborted(probe, started, problem.interval_count(), &e),
        };

        if let Some(point) = outcome.stuck_at {
            warn!(
                event = "uncoverable_point",
                id = point.id,
                position = point.position,
            );
        }

        let metrics = Metrics::finish(
            probe,
            started,
            Some(outcome.selected.len()),
            problem.interval_count(),
            None,
        );
        info!(
            event = "solve_end",
            solver = "greedy",
            covered = outcome.covered,
            size = outcome.selected.len(),
        );

        GreedyResult {
            solution: Solution::new(outcome.selected, outcome.covered),
            uncoverable: outcome.stuck_at,
            allocation_failed: false,
            metrics,
        }
    }
}

/// Result for a run that could not allocate its buffers: an empty,
/// uncovered selection with timing and memory still measured.
fn aborted<P: ResourceProbe + ?Sized>(
    probe: &P,
    started: Instant,
    total_intervals: usize,
    error: &CoverError,
) -> GreedyResult {
    warn!(event = "solve_aborted", solver = "greedy", error = %error);
    GreedyResult {
        solution: Solution::default(),
        uncoverable: None,
        allocation_failed: true,
        metrics: Metrics::finish(probe, started, None, total_intervals, None),
    }
}

/// Solves `problem` greedily with the default configuration.
///
/// Check `Solution::covered`: the selection is partial when some point
/// lies in no interval.
pub fn solve_greedy(problem: &Problem) -> (Solution, Metrics) {
    let result = GreedyRunner::run(problem, &GreedyConfig::default());
    (result.solution, result.metrics)
}
