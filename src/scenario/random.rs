//! Seeded pseudo-random instances.

use crate::error::CoverError;
use crate::model::{Interval, Point, Problem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Parameters for a pseudo-random instance.
///
/// Point positions are drawn uniformly from `[min_position, max_position]`.
/// Each interval draws a length from `[min_length, max_length]`, then a
/// start so that the whole interval stays inside the position range.
/// Equal seeds give equal instances.
///
/// # Examples
///
/// ```
/// use interval_cover::scenario::RandomScenario;
///
/// let problem = RandomScenario::small().with_seed(7).generate().unwrap();
/// assert_eq!(problem.point_count(), 8);
/// assert_eq!(problem.interval_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomScenario {
    pub points: usize,
    pub min_position: i64,
    pub max_position: i64,
    pub intervals: usize,
    pub min_length: i64,
    pub max_length: i64,
    pub seed: u64,
}

impl RandomScenario {
    /// 8 points in `[0, 50]`, 6 intervals of length 5 to 20, seed 42.
    pub fn small() -> Self {
        Self {
            points: 8,
            min_position: 0,
            max_position: 50,
            intervals: 6,
            min_length: 5,
            max_length: 20,
            seed: 42,
        }
    }

    /// 12 points in `[0, 100]`, 10 intervals of length 10 to 30, seed 43.
    pub fn medium() -> Self {
        Self {
            points: 12,
            min_position: 0,
            max_position: 100,
            intervals: 10,
            min_length: 10,
            max_length: 30,
            seed: 43,
        }
    }

    /// 15 points in `[0, 150]`, 12 intervals of length 15 to 40, seed 44.
    pub fn large() -> Self {
        Self {
            points: 15,
            min_position: 0,
            max_position: 150,
            intervals: 12,
            min_length: 15,
            max_length: 40,
            seed: 44,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_points(mut self, n: usize) -> Self {
        self.points = n;
        self
    }

    pub fn with_intervals(mut self, n: usize) -> Self {
        self.intervals = n;
        self
    }

    pub fn with_positions(mut self, min: i64, max: i64) -> Self {
        self.min_position = min;
        self.max_position = max;
        self
    }

    pub fn with_lengths(mut self, min: i64, max: i64) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), CoverError> {
        if self.min_position > self.max_position {
            return Err(CoverError::InvalidScenario(format!(
                "min_position {} exceeds max_position {}",
                self.min_position, self.max_position
            )));
        }
        if self.min_length < 0 || self.min_length > self.max_length {
            return Err(CoverError::InvalidScenario(format!(
                "length range [{}, {}] is empty or negative",
                self.min_length, self.max_length
            )));
        }
        let span = self
            .max_position
            .checked_sub(self.min_position)
            .ok_or_else(|| {
                CoverError::InvalidScenario(format!(
                    "position range [{}, {}] is too wide",
                    self.min_position, self.max_position
                ))
            })?;
        if self.max_length > span {
            return Err(CoverError::InvalidScenario(format!(
                "max_length {} does not fit in [{}, {}]",
                self.max_length, self.min_position, self.max_position
            )));
        }
        Ok(())
    }

    /// Generates the instance. Points are returned sorted by position,
    /// with ids `1..=points` assigned in draw order.
    pub fn generate(&self) -> Result<Problem, CoverError> {
        self.validate()?;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut points: Vec<Point> = (1..=self.points)
            .map(|id| {
                let position = rng.random_range(self.min_position..=self.max_position);
                Point::new(id as u32, position)
            })
            .collect();
        points.sort_by_key(|p| p.position);

        let intervals = (0..self.intervals)
            .map(|_| {
                let length = rng.random_range(self.min_length..=self.max_length);
                let start = rng.random_range(self.min_position..=self.max_position - length);
                Interval::new(start, start + length)
            })
            .collect();

        Ok(Problem::new(points, intervals))
    }
}
