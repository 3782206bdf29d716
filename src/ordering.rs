//! Traversal orders applied before search.
//!
//! Interval order decides which branches the exact search tries first
//! and which candidate greedy keeps on a tie. Point order decides which
//! uncovered point greedy anchors on next.
//!
//! All sorts are stable, so intervals equal under the chosen order keep
//! their input order.

use crate::error::{reserve_buffer, CoverError};
use crate::model::{Interval, Point};
use std::cmp::Ordering;

/// Pre-search interval order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntervalOrder {
    /// Descending length, then ascending start.
    #[default]
    LongestFirst,

    /// Ascending end, then ascending start.
    EarliestEnd,

    /// Keep the caller's order.
    Input,
}

impl IntervalOrder {
    pub fn compare(self, a: &Interval, b: &Interval) -> Ordering {
        match self {
            IntervalOrder::LongestFirst => longest_first(a, b),
            IntervalOrder::EarliestEnd => earliest_end(a, b),
            IntervalOrder::Input => Ordering::Equal,
        }
    }
}

/// Point order for greedy's "next uncovered point" scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointOrder {
    /// Ascending position.
    #[default]
    Ascending,

    /// Keep the caller's order.
    Input,
}

impl PointOrder {
    pub fn compare(self, a: &Point, b: &Point) -> Ordering {
        match self {
            PointOrder::Ascending => by_position(a, b),
            PointOrder::Input => Ordering::Equal,
        }
    }
}

/// Longer intervals first; equal lengths by smaller start.
pub fn longest_first(a: &Interval, b: &Interval) -> Ordering {
    b.length()
        .cmp(&a.length())
        .then_with(|| a.start.cmp(&b.start))
}

/// Earlier end first; equal ends by smaller start.
pub fn earliest_end(a: &Interval, b: &Interval) -> Ordering {
    a.end.cmp(&b.end).then_with(|| a.start.cmp(&b.start))
}

pub fn by_position(a: &Point, b: &Point) -> Ordering {
    a.position.cmp(&b.position)
}

/// Returns a sorted copy of `intervals`; the input is left untouched.
pub fn sorted_intervals(
    intervals: &[Interval],
    order: IntervalOrder,
) -> Result<Vec<Interval>, CoverError> {
    let mut sorted = reserve_buffer("sorted intervals", intervals.len())?;
    sorted.extend_from_slice(intervals);
    if order != IntervalOrder::Input {
        sorted.sort_by(|a, b| order.compare(a, b));
    }
    Ok(sorted)
}

/// Returns a sorted copy of `points`; the input is left untouched.
pub fn sorted_points(points: &[Point], order: PointOrder) -> Result<Vec<Point>, CoverError> {
    let mut sorted = reserve_buffer("sorted points", points.len())?;
    sorted.extend_from_slice(points);
    if order != PointOrder::Input {
        sorted.sort_by(|a, b| order.compare(a, b));
    }
    Ok(sorted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ivs(pairs: &[(i64, i64)]) -> Vec<Interval> {
        pairs.iter().map(|&(s, e)| Interval::new(s, e)).collect()
    }

    #[test]
    fn test_longest_first() {
        let input = ivs(&[(0, 12), (8, 22), (15, 28)]);
        let sorted = sorted_intervals(&input, IntervalOrder::LongestFirst).unwrap();
        assert_eq!(sorted, ivs(&[(8, 22), (15, 28), (0, 12)]));
        // Caller's slice unchanged.
        assert_eq!(input[0], Interval::new(0, 12));
    }

    #[test]
    fn test_longest_first_ties_by_start() {
        let input = ivs(&[(20, 30), (5, 15), (10, 20)]);
        let sorted = sorted_intervals(&input, IntervalOrder::LongestFirst).unwrap();
        assert_eq!(sorted, ivs(&[(5, 15), (10, 20), (20, 30)]));
    }

    #[test]
    fn test_longest_first_extreme_bounds() {
        let input = ivs(&[(i64::MAX, i64::MIN), (0, 10), (i64::MIN, i64::MAX)]);
        let sorted = sorted_intervals(&input, IntervalOrder::LongestFirst).unwrap();
        assert_eq!(
            sorted,
            ivs(&[(i64::MIN, i64::MAX), (0, 10), (i64::MAX, i64::MIN)])
        );
    }

    #[test]
    fn test_earliest_end() {
        let input = ivs(&[(5, 30), (10, 20), (0, 20)]);
        let sorted = sorted_intervals(&input, IntervalOrder::EarliestEnd).unwrap();
        assert_eq!(sorted, ivs(&[(0, 20), (10, 20), (5, 30)]));
    }

    #[test]
    fn test_input_order_preserved() {
        let input = ivs(&[(3, 4), (0, 100), (1, 2)]);
        let sorted = sorted_intervals(&input, IntervalOrder::Input).unwrap();
        assert_eq!(sorted, input);
    }

    #[test]
    fn test_points_ascending_stable() {
        let pts = vec![Point::new(1, 30), Point::new(2, 10), Point::new(3, 10)];
        let sorted = sorted_points(&pts, PointOrder::Ascending).unwrap();
        let ids: Vec<u32> = sorted.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
