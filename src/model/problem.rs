//! Problem instances.

use super::interval::Interval;
use super::point::Point;

/// A minimum interval cover instance.
///
/// Points and intervals are kept in the order the caller supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Problem {
    points: Vec<Point>,
    intervals: Vec<Interval>,
}

impl Problem {
    pub fn new(points: Vec<Point>, intervals: Vec<Interval>) -> Self {
        Self { points, intervals }
    }

    /// Builds a problem from bare positions and `(start, end)` pairs.
    ///
    /// Point ids are assigned `1..=n` in input order.
    ///
    /// ```
    /// use interval_cover::model::Problem;
    ///
    /// let problem = Problem::from_positions(&[5, 10, 15], &[(0, 12), (8, 22)]);
    /// assert_eq!(problem.points()[2].id, 3);
    /// assert_eq!(problem.interval_count(), 2);
    /// ```
    pub fn from_positions(positions: &[i64], intervals: &[(i64, i64)]) -> Self {
        let points = positions
            .iter()
            .zip(1u32..)
            .map(|(&position, id)| Point::new(id, position))
            .collect();
        let intervals = intervals
            .iter()
            .map(|&(start, end)| Interval::new(start, end))
            .collect();
        Self::new(points, intervals)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn interval_count(&self) -> usize {
        self.intervals.len()
    }

    /// Points that no interval in the instance contains.
    ///
    /// A non-empty result means neither solver can produce a full cover.
    pub fn uncoverable_points(&self) -> Vec<Point> {
        self.points
            .iter()
            .filter(|p| !self.intervals.iter().any(|iv| iv.contains(p)))
            .copied()
            .collect()
    }

    pub fn is_feasible(&self) -> bool {
        self.points
            .iter()
            .all(|p| self.intervals.iter().any(|iv| iv.contains(p)))
    }
}
