//! Plain-text solve reports.

use super::Metrics;
use crate::model::{Point, Problem, Solution};
use std::fmt::Write;

/// Renders the selected intervals, the points they cover and the
/// metrics block.
pub fn render_report(points: &[Point], solution: Option<&Solution>, metrics: &Metrics) -> String {
    let mut out = String::new();

    match solution {
        None => {
            let _ = writeln!(out, "No complete cover found.");
        }
        Some(solution) => {
            let label = if solution.covered { "Cover" } else { "Partial cover" };
            let _ = writeln!(out, "{label} ({} intervals):", solution.len());
            for (i, interval) in (1..).zip(solution) {
                let _ = writeln!(out, "  Interval {i}: {interval}");
            }

            let covered: Vec<&Point> = points
                .iter()
                .filter(|p| solution.iter().any(|iv| iv.contains(p)))
                .collect();
            let _ = writeln!(out, "Covered points ({} of {}):", covered.len(), points.len());
            for p in covered {
                let _ = writeln!(out, "  Point {}: {}", p.id, p.position);
            }
        }
    }

    let _ = writeln!(out, "Time: {:.4} ms", metrics.time_ms());
    match metrics.peak_memory_kb {
        Some(kb) => {
            let _ = writeln!(out, "Peak memory: {kb} KB");
        }
        None => {
            let _ = writeln!(out, "Peak memory: n/a");
        }
    }
    if let Some(size) = metrics.solution_size {
        let _ = writeln!(out, "Solution size: {size}");
    }
    let _ = writeln!(out, "Quality: {:.4}", metrics.quality);
    if let Some(nodes) = metrics.nodes_visited {
        let _ = writeln!(out, "Nodes visited: {nodes}");
    }

    out
}

/// Lists the points no interval of `problem` contains, or `None` when the
/// instance is feasible.
pub fn render_uncoverable(problem: &Problem) -> Option<String> {
    let missing = problem.uncoverable_points();
    if missing.is_empty() {
        return None;
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Uncoverable points ({} of {}):",
        missing.len(),
        problem.point_count()
    );
    for p in &missing {
        let _ = writeln!(out, "  Point {}: {}", p.id, p.position);
    }
    Some(out)
}
