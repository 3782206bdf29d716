//! Exact solver configuration.

use crate::error::CoverError;
use crate::ordering::IntervalOrder;

/// Configuration for [`ExactRunner`](super::ExactRunner).
///
/// # Examples
///
/// ```
/// use interval_cover::exact::ExactConfig;
/// use interval_cover::ordering::IntervalOrder;
///
/// let config = ExactConfig::default()
///     .with_interval_order(IntervalOrder::EarliestEnd)
///     .with_node_limit(100_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExactConfig {
    /// Order in which intervals are decided.
    pub interval_order: IntervalOrder,

    /// Stop after visiting this many nodes. `None` searches exhaustively.
    ///
    /// When the budget runs out the best cover found so far is returned
    /// without an optimality guarantee.
    pub node_limit: Option<u64>,
}

impl ExactConfig {
    pub fn with_interval_order(mut self, order: IntervalOrder) -> Self {
        self.interval_order = order;
        self
    }

    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), CoverError> {
        if self.node_limit == Some(0) {
            return Err(CoverError::InvalidConfig(
                "node_limit must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExactConfig::default();
        assert_eq!(config.interval_order, IntervalOrder::LongestFirst);
        assert_eq!(config.node_limit, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_limit() {
        let config = ExactConfig::default().with_node_limit(0);
        assert!(config.validate().is_err());
    }
}
