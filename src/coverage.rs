//! Coverage evaluation shared by both solvers.
//!
//! [`is_fully_covered`] is a pure check over a candidate selection.
//! [`CoverageMask`] keeps the same marks incrementally, for solvers that
//! grow a selection one interval at a time.

use crate::error::{reserve_buffer, CoverError};
use crate::model::{covers, Interval, Point};

/// Returns `true` iff every point lies in at least one of `selected`.
///
/// Uses a scratch mark per point. Intervals are applied in the order
/// given; points already marked are skipped. An empty point set is
/// trivially covered.
///
/// Cost is `O(|selected| * |points|)`.
///
/// ```
/// use interval_cover::coverage::is_fully_covered;
/// use interval_cover::model::{Interval, Point};
///
/// let points = [Point::new(1, 5), Point::new(2, 15)];
/// assert!(is_fully_covered(&points, &[Interval::new(0, 20)]));
/// assert!(!is_fully_covered(&points, &[Interval::new(0, 10)]));
/// ```
pub fn is_fully_covered(points: &[Point], selected: &[Interval]) -> bool {
    let mut marks = vec![false; points.len()];
    is_fully_covered_in(&mut marks, points, selected)
}

/// [`is_fully_covered`] over a caller-owned scratch buffer.
///
/// `marks` must hold one slot per point; it is cleared on entry, so it can
/// be reused across calls without reallocating.
pub(crate) fn is_fully_covered_in(
    marks: &mut [bool],
    points: &[Point],
    selected: &[Interval],
) -> bool {
    debug_assert_eq!(marks.len(), points.len());
    marks.fill(false);
    let mut covered = 0;

    for interval in selected {
        for (mark, point) in marks.iter_mut().zip(points) {
            if !*mark && covers(point, interval) {
                *mark = true;
                covered += 1;
            }
        }
        if covered == points.len() {
            break;
        }
    }

    covered == points.len()
}

/// Incremental per-point coverage marks over a borrowed point slice.
#[derive(Debug, Clone)]
pub struct CoverageMask<'a> {
    points: &'a [Point],
    marks: Vec<bool>,
    covered: usize,
}

impl<'a> CoverageMask<'a> {
    /// Creates a mask with every point unmarked.
    ///
    /// Fails only if the mark buffer cannot be allocated.
    pub fn try_new(points: &'a [Point]) -> Result<Self, CoverError> {
        let mut marks = reserve_buffer("coverage mask", points.len())?;
        marks.resize(points.len(), false);
        Ok(Self {
            points,
            marks,
            covered: 0,
        })
    }

    pub fn covered_count(&self) -> usize {
        self.covered
    }

    pub fn is_complete(&self) -> bool {
        self.covered == self.points.len()
    }

    /// Index of the first unmarked point in slice order.
    pub fn first_uncovered(&self) -> Option<usize> {
        self.marks.iter().position(|&m| !m)
    }

    /// Number of currently unmarked points that `interval` would cover.
    pub fn gain(&self, interval: &Interval) -> usize {
        self.marks
            .iter()
            .zip(self.points)
            .filter(|&(&m, p)| !m && covers(p, interval))
            .count()
    }

    /// Marks every unmarked point `interval` covers; returns how many were
    /// newly marked.
    pub fn mark(&mut self, interval: &Interval) -> usize {
        let mut newly = 0;
        for (mark, point) in self.marks.iter_mut().zip(self.points) {
            if !*mark && covers(point, interval) {
                *mark = true;
                newly += 1;
            }
        }
        self.covered += newly;
        newly
    }
}
