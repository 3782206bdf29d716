//! Minimum interval cover.
//!
//! Given points on an integer line and a set of closed intervals, select
//! the fewest intervals such that every point lies in at least one of
//! them. Two solvers are provided:
//!
//! - **Exact** ([`exact`]): depth-first branch and bound over
//!   include/exclude decisions, with incumbent-size pruning. Returns a
//!   minimum cover, or no cover when the instance is infeasible.
//! - **Greedy** ([`greedy`]): anchors on the first uncovered point and
//!   takes the interval covering the most uncovered points. Fast, never
//!   revised, not guaranteed minimum.
//!
//! Both share the containment test in [`model`], the evaluator in
//! [`coverage`] and the traversal orders in [`ordering`]. [`metrics`]
//! times each solve, scores it and compares the two solvers;
//! [`scenario`] supplies fixed and seeded random instances.
//!
//! ```
//! use interval_cover::exact::solve_exact;
//! use interval_cover::greedy::solve_greedy;
//! use interval_cover::model::Problem;
//!
//! let problem = Problem::from_positions(&[5, 10, 15], &[(0, 12), (8, 22), (15, 28)]);
//!
//! let (exact, metrics) = solve_exact(&problem);
//! assert_eq!(exact.unwrap().len(), 2);
//! assert_eq!(metrics.nodes_visited, Some(12));
//!
//! let (greedy, _) = solve_greedy(&problem);
//! assert!(greedy.covered);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for model, config and metrics types.
//! - `parallel`: run independent comparisons on the rayon pool.

pub mod coverage;
pub mod error;
pub mod exact;
pub mod greedy;
pub mod metrics;
pub mod model;
pub mod ordering;
pub mod scenario;

pub use error::CoverError;
