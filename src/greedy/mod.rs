//! Greedy interval cover.
//!
//! Repeatedly anchors on the first uncovered point and selects, among the
//! intervals containing it, the one that covers the most still-uncovered
//! points. Ties prefer the shorter interval, then the earlier one in the
//! pre-sorted order. Selections are never revised.
//!
//! The heuristic has no optimality guarantee: on the same instance it may
//! return a strictly larger cover than [`crate::exact`].

mod config;
mod runner;

pub use config::GreedyConfig;
pub use runner::{solve_greedy, GreedyResult, GreedyRunner};
