//! Closed intervals and the containment test.

use super::point::Point;
use std::fmt;

/// A closed interval `[start, end]` on the integer line.
///
/// Intervals with `start > end` are accepted but cover nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub start: i64,
    pub end: i64,
}

impl Interval {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// `end - start`, saturating at the `i64` bounds. Negative for
    /// malformed intervals.
    pub fn length(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `start > end`.
    pub fn is_malformed(&self) -> bool {
        self.start > self.end
    }

    /// Whether this interval contains the point (inclusive on both ends).
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        covers(point, self)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Returns `true` iff `interval.start <= point.position <= interval.end`.
#[inline]
pub fn covers(point: &Point, interval: &Interval) -> bool {
    interval.start <= point.position && point.position <= interval.end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_inclusive_bounds() {
        let iv = Interval::new(0, 12);
        assert!(covers(&Point::new(1, 0), &iv));
        assert!(covers(&Point::new(2, 12), &iv));
        assert!(covers(&Point::new(3, 5), &iv));
        assert!(!covers(&Point::new(4, -1), &iv));
        assert!(!covers(&Point::new(5, 13), &iv));
    }

    #[test]
    fn test_degenerate_single_position() {
        let iv = Interval::new(7, 7);
        assert_eq!(iv.length(), 0);
        assert!(iv.contains(&Point::new(1, 7)));
        assert!(!iv.contains(&Point::new(1, 8)));
    }

    #[test]
    fn test_malformed_covers_nothing() {
        let iv = Interval::new(10, 2);
        assert!(iv.is_malformed());
        for pos in -5..20 {
            assert!(!iv.contains(&Point::new(0, pos)));
        }
    }

    #[test]
    fn test_length_saturates_at_extremes() {
        assert_eq!(Interval::new(i64::MIN, i64::MAX).length(), i64::MAX);
        assert_eq!(Interval::new(i64::MAX, i64::MIN).length(), i64::MIN);
        assert!(Interval::new(i64::MIN, i64::MAX).contains(&Point::new(1, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(Interval::new(-3, 4).to_string(), "[-3, 4]");
    }
}
