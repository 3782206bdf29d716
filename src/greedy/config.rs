//! Greedy solver configuration.

use crate::ordering::{IntervalOrder, PointOrder};

/// Configuration for [`GreedyRunner`](super::GreedyRunner).
///
/// Every combination of orders is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreedyConfig {
    /// Candidate order; decides the final tie-break.
    pub interval_order: IntervalOrder,

    /// Order in which uncovered points are picked as anchors.
    pub point_order: PointOrder,
}

impl GreedyConfig {
    pub fn with_interval_order(mut self, order: IntervalOrder) -> Self {
        self.interval_order = order;
        self
    }

    pub fn with_point_order(mut self, order: PointOrder) -> Self {
        self.point_order = order;
        self
    }
}
