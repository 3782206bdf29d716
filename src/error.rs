//! Crate error type.

use std::collections::TryReserveError;
use thiserror::Error;

/// Errors raised by configuration, scenario construction, buffer
/// acquisition and report export.
///
/// Infeasible instances are not errors: solvers report them through
/// their result status.
#[derive(Debug, Error)]
pub enum CoverError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid scenario: {0}")]
    InvalidScenario(String),

    #[error("failed to allocate {buffer} buffer")]
    Allocation {
        buffer: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Creates an empty vector with room for exactly `capacity` elements,
/// reporting allocation failure instead of aborting.
pub(crate) fn reserve_buffer<T>(
    buffer: &'static str,
    capacity: usize,
) -> Result<Vec<T>, CoverError> {
    let mut v = Vec::new();
    v.try_reserve_exact(capacity)
        .map_err(|source| CoverError::Allocation { buffer, source })?;
    Ok(v)
}
