//! Ready-made problem instances.
//!
//! [`Scenario`] names three fixed instances of increasing size, used to
//! compare the solvers on reproducible inputs. [`RandomScenario`] builds
//! seeded pseudo-random instances; its presets mirror the fixed sizes.

mod fixed;
mod random;

pub use random::RandomScenario;

use crate::model::Problem;
use std::fmt;

/// Fixed benchmark instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scenario {
    /// 8 points, 10 intervals.
    Small,
    /// 10 points, 12 intervals.
    Medium,
    /// 12 points, 15 intervals.
    Large,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Small, Scenario::Medium, Scenario::Large];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Small => "small",
            Scenario::Medium => "medium",
            Scenario::Large => "large",
        }
    }

    /// The fixed instance.
    pub fn problem(self) -> Problem {
        match self {
            Scenario::Small => {
                Problem::from_positions(&fixed::SMALL_POINTS, &fixed::SMALL_INTERVALS)
            }
            Scenario::Medium => {
                Problem::from_positions(&fixed::MEDIUM_POINTS, &fixed::MEDIUM_INTERVALS)
            }
            Scenario::Large => {
                Problem::from_positions(&fixed::LARGE_POINTS, &fixed::LARGE_INTERVALS)
            }
        }
    }

    /// Seeded random generator parameters of matching scale.
    pub fn random(self) -> RandomScenario {
        match self {
            Scenario::Small => RandomScenario::small(),
            Scenario::Medium => RandomScenario::medium(),
            Scenario::Large => RandomScenario::large(),
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exact::solve_exact;
    use crate::greedy::solve_greedy;

    #[test]
    fn test_sizes() {
        let sizes: Vec<(usize, usize)> = Scenario::ALL
            .iter()
            .map(|s| {
                let p = s.problem();
                (p.point_count(), p.interval_count())
            })
            .collect();
        assert_eq!(sizes, vec![(8, 10), (10, 12), (12, 15)]);
    }

    #[test]
    fn test_fixed_scenarios_are_feasible() {
        for s in Scenario::ALL {
            assert!(s.problem().is_feasible(), "{s}");
        }
    }

    #[test]
    fn test_known_optima() {
        let expected = [(Scenario::Small, 3), (Scenario::Medium, 4), (Scenario::Large, 4)];
        for (scenario, size) in expected {
            let problem = scenario.problem();
            let (solution, metrics) = solve_exact(&problem);
            let solution = solution.unwrap();
            assert_eq!(solution.len(), size, "{scenario}");
            assert!(solution.verify(problem.points()));
            assert!(metrics.nodes_visited.unwrap() > 0);
        }
    }

    #[test]
    fn test_greedy_never_beats_exact() {
        for scenario in Scenario::ALL {
            let problem = scenario.problem();
            let (exact, _) = solve_exact(&problem);
            let (greedy, _) = solve_greedy(&problem);
            assert!(greedy.covered);
            assert!(greedy.len() >= exact.unwrap().len(), "{scenario}");
        }
    }
}
