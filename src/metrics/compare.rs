//! Side-by-side runs of the exact and greedy solvers.

use super::record::MetricsRecord;
use crate::error::CoverError;
use crate::exact::{ExactConfig, ExactResult, ExactRunner};
use crate::greedy::{GreedyConfig, GreedyResult, GreedyRunner};
use crate::model::Problem;

/// Both solvers' results on one named instance.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub scenario: String,
    pub exact: ExactResult,
    pub greedy: GreedyResult,
}

impl Comparison {
    /// Runs the exact solver, then greedy, on `problem`.
    pub fn run(
        scenario: impl Into<String>,
        problem: &Problem,
        exact: &ExactConfig,
        greedy: &GreedyConfig,
    ) -> Result<Self, CoverError> {
        Ok(Self {
            scenario: scenario.into(),
            exact: ExactRunner::run(problem, exact)?,
            greedy: GreedyRunner::run(problem, greedy),
        })
    }

    /// `|greedy| - |exact|` when both produced a full cover.
    pub fn size_gap(&self) -> Option<isize> {
        let exact = self.exact.solution.as_ref()?;
        if !self.greedy.is_covered() {
            return None;
        }
        Some(self.greedy.solution.len() as isize - exact.len() as isize)
    }

    pub fn exact_record(&self) -> MetricsRecord {
        MetricsRecord::new(self.scenario.clone(), &self.exact.metrics)
    }

    pub fn greedy_record(&self) -> MetricsRecord {
        MetricsRecord::new(self.scenario.clone(), &self.greedy.metrics)
    }
}

/// Compares both solvers over every named instance, in input order.
///
/// With the `parallel` feature and `parallel == true`, instances are run
/// on the rayon pool; each individual solve stays single-threaded. Peak
/// memory is process-wide and is not attributable per instance then.
/// Without the feature a `parallel` request logs a warning and runs
/// serially.
pub fn compare_all(
    scenarios: &[(String, Problem)],
    exact: &ExactConfig,
    greedy: &GreedyConfig,
    parallel: bool,
) -> Result<Vec<Comparison>, CoverError> {
    if parallel {
        compare_parallel(scenarios, exact, greedy)
    } else {
        scenarios
            .iter()
            .map(|(name, problem)| Comparison::run(name.as_str(), problem, exact, greedy))
            .collect()
    }
}

#[cfg(feature = "parallel")]
fn compare_parallel(
    scenarios: &[(String, Problem)],
    exact: &ExactConfig,
    greedy: &GreedyConfig,
) -> Result<Vec<Comparison>, CoverError> {
    use rayon::prelude::*;

    scenarios
        .par_iter()
        .map(|(name, problem)| Comparison::run(name.as_str(), problem, exact, greedy))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compare_parallel(
    scenarios: &[(String, Problem)],
    exact: &ExactConfig,
    greedy: &GreedyConfig,
) -> Result<Vec<Comparison>, CoverError> {
    tracing::warn!(
        event = "parallel_unavailable",
        scenarios = scenarios.len(),
        "built without the `parallel` feature; running serially"
    );
    compare_all(scenarios, exact, greedy, false)
}
