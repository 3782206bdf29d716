//! Selected interval sets.

use super::interval::Interval;
use super::point::Point;
use crate::coverage::is_fully_covered;

/// A set of selected intervals, in selection order.
///
/// `covered` records whether the selection covers every point of the
/// instance it was built for. Exact solutions are always covered; a
/// greedy solution may be a partial selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub intervals: Vec<Interval>,
    pub covered: bool,
}

impl Solution {
    pub fn new(intervals: Vec<Interval>, covered: bool) -> Self {
        Self { intervals, covered }
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Re-checks coverage against `points`, independent of `covered`.
    pub fn verify(&self, points: &[Point]) -> bool {
        is_fully_covered(points, &self.intervals)
    }
}

impl<'a> IntoIterator for &'a Solution {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}
