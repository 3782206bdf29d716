//! Exact minimum cover by depth-first branch and bound.
//!
//! Intervals are decided one at a time in a fixed pre-sorted order. At
//! each decision the search first tries including the interval, then
//! excluding it. Two cuts bound the tree:
//!
//! - a node whose partial selection is already as large as the
//!   incumbent returns immediately;
//! - the include branch is skipped when one more interval would make the
//!   partial selection as large as the incumbent.
//!
//! The exclude branch is never cut. Worst-case cost is exponential in the
//! number of intervals; recursion depth is bounded by it.
//!
//! # References
//!
//! Land & Doig (1960), "An Automatic Method of Solving Discrete
//! Programming Problems"

mod config;
mod runner;

pub use config::ExactConfig;
pub use runner::{solve_exact, ExactResult, ExactRunner, ExactStatus};
