//! Branch-and-bound search loop.

use super::config::ExactConfig;
use crate::coverage::is_fully_covered_in;
use crate::error::{reserve_buffer, CoverError};
use crate::metrics::{Metrics, ResourceProbe, SystemProbe};
use crate::model::{Interval, Point, Problem, Solution};
use crate::ordering::sorted_intervals;
use std::time::Instant;
use tracing::{debug, info, warn};

/// How an exact solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExactStatus {
    /// The search space was exhausted; the cover is minimum.
    Optimal,
    /// The search space was exhausted without finding any cover.
    Infeasible,
    /// The node budget ran out. A cover may or may not have been found.
    NodeLimitReached,
    /// A solver buffer could not be allocated; no search was run.
    AllocationFailed,
}

/// Result of an exact solve.
#[derive(Debug, Clone)]
pub struct ExactResult {
    /// Best cover found. Always `covered` when present.
    pub solution: Option<Solution>,

    pub status: ExactStatus,

    pub metrics: Metrics,
}

impl ExactResult {
    pub fn is_optimal(&self) -> bool {
        self.status == ExactStatus::Optimal
    }

    pub fn nodes_visited(&self) -> u64 {
        self.metrics.nodes_visited.unwrap_or(0)
    }
}

/// Search state threaded through the recursion by `&mut`.
///
/// `partial` holds the intervals included on the current path in
/// decision order; `best` holds the incumbent once `best_len` is set.
/// Both buffers are reserved for `intervals.len()` up front. `marks` is the
/// coverage scratch buffer, one slot per point, reused at every node.
struct SearchContext<'a> {
    points: &'a [Point],
    intervals: &'a [Interval],
    partial: Vec<Interval>,
    best: Vec<Interval>,
    marks: Vec<bool>,
    best_len: Option<usize>,
    nodes_visited: u64,
    node_limit: Option<u64>,
    limit_reached: bool,
}

impl SearchContext<'_> {
    fn incumbent_size(&self) -> usize {
        self.best_len.unwrap_or(usize::MAX)
    }

    fn descend(&mut self, index: usize) {
        if let Some(limit) = self.node_limit {
            if self.nodes_visited >= limit {
                self.limit_reached = true;
                return;
            }
        }
        self.nodes_visited += 1;

        if index == self.intervals.len() {
            return;
        }

        // Bound: this path can no longer beat the incumbent.
        if self.partial.len() >= self.incumbent_size() {
            return;
        }

        // Look-ahead: including one more would tie or exceed the incumbent.
        if self.partial.len() + 1 < self.incumbent_size() {
            self.partial.push(self.intervals[index]);

            if is_fully_covered_in(&mut self.marks, self.points, &self.partial) {
                if self.partial.len() < self.incumbent_size() {
                    self.best.clear();
                    self.best.extend_from_slice(&self.partial);
                    self.best_len = Some(self.partial.len());
                    debug!(
                        event = "incumbent",
                        size = self.partial.len(),
                        nodes = self.nodes_visited,
                    );
                }
            } else {
                self.descend(index + 1);
            }

            self.partial.pop();
        }

        self.descend(index + 1);
    }
}

struct SearchOutcome {
    best: Option<Vec<Interval>>,
    nodes_visited: u64,
    limit_reached: bool,
}

fn search(problem: &Problem, config: &ExactConfig) -> Result<SearchOutcome, CoverError> {
    let intervals = sorted_intervals(problem.intervals(), config.interval_order)?;
    let n = intervals.len();
    let mut marks = reserve_buffer("coverage scratch", problem.point_count())?;
    marks.resize(problem.point_count(), false);

    let mut ctx = SearchContext {
        points: problem.points(),
        intervals: &intervals,
        partial: reserve_buffer("partial solution", n)?,
        best: reserve_buffer("best solution", n)?,
        marks,
        best_len: None,
        nodes_visited: 0,
        node_limit: config.node_limit,
        limit_reached: false,
    };

    if ctx.points.is_empty() {
        // The empty selection already covers an empty point set.
        ctx.best_len = Some(0);
    } else {
        ctx.descend(0);
    }

    Ok(SearchOutcome {
        best: ctx.best_len.map(|_| ctx.best),
        nodes_visited: ctx.nodes_visited,
        limit_reached: ctx.limit_reached,
    })
}

/// Executes the exact solver.
///
/// # Usage
///
/// ```
/// use interval_cover::exact::{ExactConfig, ExactRunner, ExactStatus};
/// use interval_cover::model::Problem;
///
/// let problem = Problem::from_positions(&[5, 10, 15], &[(0, 12), (8, 22), (15, 28)]);
/// let result = ExactRunner::run(&problem, &ExactConfig::default()).unwrap();
/// assert_eq!(result.status, ExactStatus::Optimal);
/// assert_eq!(result.solution.unwrap().len(), 2);
/// ```
pub struct ExactRunner;

impl ExactRunner {
    /// Runs the search, timing it with [`SystemProbe`].
    pub fn run(problem: &Problem, config: &ExactConfig) -> Result<ExactResult, CoverError> {
        Self::run_with_probe(problem, config, &SystemProbe)
    }

    /// Runs the search with a caller-supplied clock and memory probe.
    ///
    /// Returns an error only for an invalid configuration.
    pub fn run_with_probe<P: ResourceProbe + ?Sized>(
        problem: &Problem,
        config: &ExactConfig,
        probe: &P,
    ) -> Result<ExactResult, CoverError> {
        config.validate()?;
        Ok(Self::execute(problem, config, probe))
    }

    fn execute<P: ResourceProbe + ?Sized>(
        problem: &Problem,
        config: &ExactConfig,
        probe: &P,
    ) -> ExactResult {
        let started = probe.now();
        info!(
            event = "solve_start",
            solver = "exact",
            points = problem.point_count(),
            intervals = problem.interval_count(),
        );

        let outcome = match search(problem, config) {
            Ok(outcome) => outcome,
            Err(e) => return aborted(probe, started, problem.interval_count(), &e),
        };

        let status = match (&outcome.best, outcome.limit_reached) {
            (_, true) => ExactStatus::NodeLimitReached,
            (Some(_), false) => ExactStatus::Optimal,
            (None, false) => ExactStatus::Infeasible,
        };
        if outcome.limit_reached {
            warn!(
                event = "node_limit_reached",
                nodes = outcome.nodes_visited,
                found = outcome.best.is_some(),
            );
        }

        let solution = outcome.best.map(|best| Solution::new(best, true));
        let metrics = Metrics::finish(
            probe,
            started,
            solution.as_ref().map(Solution::len),
            problem.interval_count(),
            Some(outcome.nodes_visited),
        );

        info!(
            event = "solve_end",
            solver = "exact",
            status = ?status,
            size = ?metrics.solution_size,
            nodes = outcome.nodes_visited,
        );

        ExactResult {
            solution,
            status,
            metrics,
        }
    }
}

/// Result for a solve that could not allocate its buffers. Timing and
/// memory are still measured; no node was visited.
fn aborted<P: ResourceProbe + ?Sized>(
    probe: &P,
    started: Instant,
    total_intervals: usize,
    error: &CoverError,
) -> ExactResult {
    warn!(event = "solve_aborted", solver = "exact", error = %error);
    ExactResult {
        solution: None,
        status: ExactStatus::AllocationFailed,
        metrics: Metrics::finish(probe, started, None, total_intervals, Some(0)),
    }
}

/// Solves `problem` exactly with the default configuration.
///
/// Returns `None` when the intervals cannot cover every point.
pub fn solve_exact(problem: &Problem) -> (Option<Solution>, Metrics) {
    let result = ExactRunner::execute(problem, &ExactConfig::default(), &SystemProbe);
    (result.solution, result.metrics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coverage::is_fully_covered;
    use crate::ordering::IntervalOrder;

    fn sample() -> Problem {
        Problem::from_positions(&[5, 10, 15], &[(0, 12), (8, 22), (15, 28)])
    }

    /// Smallest covering subset size by enumeration.
    fn brute_force_min(problem: &Problem) -> Option<usize> {
        let ivs = problem.intervals();
        (0u32..1 << ivs.len())
            .filter_map(|mask| {
                let chosen: Vec<Interval> = (0..ivs.len())
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| ivs[i])
                    .collect();
                is_fully_covered(problem.points(), &chosen).then_some(chosen.len())
            })
            .min()
    }

    #[test]
    fn test_sample_minimum_two() {
        let result = ExactRunner::run(&sample(), &ExactConfig::default()).unwrap();
        assert!(result.is_optimal());
        let solution = result.solution.unwrap();
        assert_eq!(solution.len(), 2);
        assert!(solution.covered);
        assert!(solution.verify(sample().points()));
        // First size-2 cover in longest-first order, in decision order.
        assert_eq!(
            solution.intervals,
            vec![Interval::new(8, 22), Interval::new(0, 12)]
        );
    }

    #[test]
    fn test_sample_node_count() {
        let result = ExactRunner::run(&sample(), &ExactConfig::default()).unwrap();
        assert_eq!(result.nodes_visited(), 12);
        assert_eq!(result.metrics.nodes_visited, Some(12));
        assert!((result.metrics.quality - (1.0 - 2.0 / 3.0)).abs() < 1e-12);
    }

    #[test]
    fn test_allocation_failure_keeps_metrics() {
        let err = reserve_buffer::<u64>("partial solution", usize::MAX).unwrap_err();
        let started = SystemProbe.now();
        let result = aborted(&SystemProbe, started, 3, &err);

        assert_eq!(result.status, ExactStatus::AllocationFailed);
        assert!(!result.is_optimal());
        assert!(result.solution.is_none());
        assert_eq!(result.metrics.nodes_visited, Some(0));
        assert_eq!(result.metrics.solution_size, None);
        assert_eq!(result.metrics.quality, 0.0);
        assert!(result.metrics.time_ms() >= 0.0);
        assert_eq!(
            result.metrics.peak_memory_kb.is_some(),
            SystemProbe.peak_memory_kb().is_some()
        );
    }

    #[test]
    fn test_infeasible_reports_no_solution() {
        let problem = Problem::from_positions(&[100], &[(0, 50)]);
        let (solution, metrics) = solve_exact(&problem);
        assert!(solution.is_none());
        assert_eq!(metrics.solution_size, None);
        assert_eq!(metrics.quality, 0.0);

        let result = ExactRunner::run(&problem, &ExactConfig::default()).unwrap();
        assert_eq!(result.status, ExactStatus::Infeasible);
    }

    #[test]
    fn test_no_intervals() {
        let problem = Problem::from_positions(&[1], &[]);
        let result = ExactRunner::run(&problem, &ExactConfig::default()).unwrap();
        assert_eq!(result.status, ExactStatus::Infeasible);
        assert!(result.solution.is_none());
        assert_eq!(result.metrics.quality, 0.0);
        // Root node only.
        assert_eq!(result.nodes_visited(), 1);
    }

    #[test]
    fn test_no_points_needs_no_intervals() {
        let problem = Problem::from_positions(&[], &[(0, 5), (3, 9)]);
        let result = ExactRunner::run(&problem, &ExactConfig::default()).unwrap();
        assert_eq!(result.status, ExactStatus::Optimal);
        let solution = result.solution.unwrap();
        assert!(solution.is_empty());
        assert_eq!(result.metrics.quality, 1.0);
    }

    #[test]
    fn test_malformed_interval_is_ignored() {
        let problem = Problem::from_positions(&[5], &[(10, 0), (4, 6)]);
        let (solution, _) = solve_exact(&problem);
        assert_eq!(solution.unwrap().intervals, vec![Interval::new(4, 6)]);
    }

    #[test]
    fn test_single_interval_covers_all() {
        let problem = Problem::from_positions(&[1, 2, 3], &[(0, 1), (0, 10), (2, 3)]);
        let (solution, metrics) = solve_exact(&problem);
        assert_eq!(solution.unwrap().intervals, vec![Interval::new(0, 10)]);
        assert_eq!(metrics.solution_size, Some(1));
    }

    #[test]
    fn test_matches_brute_force() {
        let cases = [
            Problem::from_positions(
                &[5, 10, 15, 20, 25, 30, 35, 40],
                &[
                    (0, 12),
                    (8, 22),
                    (15, 28),
                    (25, 42),
                    (5, 18),
                    (18, 32),
                    (30, 45),
                    (3, 15),
                    (20, 35),
                    (12, 26),
                ],
            ),
            Problem::from_positions(&[1, 4, 9, 16], &[(0, 4), (4, 9), (9, 16), (0, 1), (10, 20)]),
            Problem::from_positions(&[0, 50, 100], &[(0, 0), (50, 50), (100, 100), (0, 49)]),
        ];
        for problem in &cases {
            let (solution, _) = solve_exact(problem);
            assert_eq!(solution.map(|s| s.len()), brute_force_min(problem));
        }
    }

    #[test]
    fn test_order_does_not_change_optimum() {
        let problem = sample();
        for order in [
            IntervalOrder::LongestFirst,
            IntervalOrder::EarliestEnd,
            IntervalOrder::Input,
        ] {
            let config = ExactConfig::default().with_interval_order(order);
            let result = ExactRunner::run(&problem, &config).unwrap();
            assert_eq!(result.solution.unwrap().len(), 2, "order {order:?}");
        }
    }

    #[test]
    fn test_node_limit_keeps_incumbent() {
        let config = ExactConfig::default().with_node_limit(3);
        let result = ExactRunner::run(&sample(), &config).unwrap();
        assert_eq!(result.status, ExactStatus::NodeLimitReached);
        assert_eq!(result.nodes_visited(), 3);
        let solution = result.solution.unwrap();
        assert_eq!(solution.len(), 3);
        assert!(solution.verify(sample().points()));
    }

    #[test]
    fn test_node_limit_before_any_cover() {
        let config = ExactConfig::default().with_node_limit(1);
        let result = ExactRunner::run(&sample(), &config).unwrap();
        assert_eq!(result.status, ExactStatus::NodeLimitReached);
        assert!(result.solution.is_none());
        assert_eq!(result.nodes_visited(), 1);
    }

    #[test]
    fn test_generous_limit_matches_unbounded() {
        let config = ExactConfig::default().with_node_limit(12);
        let result = ExactRunner::run(&sample(), &config).unwrap();
        assert_eq!(result.status, ExactStatus::Optimal);
        assert_eq!(result.nodes_visited(), 12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ExactConfig::default().with_node_limit(0);
        assert!(matches!(
            ExactRunner::run(&sample(), &config),
            Err(CoverError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_problem_not_mutated() {
        let problem = sample();
        let before = problem.clone();
        let _ = solve_exact(&problem);
        assert_eq!(problem, before);
    }
}
