//! Problem model: points on a line, closed intervals, and covers.
//!
//! A [`Problem`] owns its [`Point`]s and [`Interval`]s. Solvers never
//! reorder or mutate them; they sort private copies instead.

mod interval;
mod point;
mod problem;
mod solution;

pub use interval::{covers, Interval};
pub use point::Point;
pub use problem::Problem;
pub use solution::Solution;
