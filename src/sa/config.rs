//! SA configuration and cooling schedules.

use crate::error::{QueensError, Result};

/// Maps the step counter `t` (starting at 1) to a temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolingSchedule {
    /// Harmonic cooling: `T(t) = 1/t - offset`.
    ///
    /// Stops once `T ≤ 0`, i.e. after `⌈1/offset⌉ - 1` steps.
    Harmonic {
        /// Subtracted from `1/t`. Must be positive.
        offset: f64,
    },

    /// Geometric cooling: `T(t) = initial_temperature * alpha^(t-1)`.
    ///
    /// Stops once `T ≤ min_temperature`.
    Geometric {
        initial_temperature: f64,
        /// Cooling factor in (0, 1). Higher = slower cooling.
        alpha: f64,
        min_temperature: f64,
    },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Harmonic { offset: 0.001 }
    }
}

impl CoolingSchedule {
    /// Temperature at step `t` (1-based).
    pub fn temperature(&self, t: usize) -> f64 {
        match *self {
            CoolingSchedule::Harmonic { offset } => 1.0 / t as f64 - offset,
            CoolingSchedule::Geometric {
                initial_temperature,
                alpha,
                ..
            } => initial_temperature * alpha.powf((t - 1) as f64),
        }
    }

    /// Whether the schedule has run out at `temperature`.
    pub fn is_frozen(&self, temperature: f64) -> bool {
        match *self {
            CoolingSchedule::Harmonic { .. } => temperature <= 0.0,
            CoolingSchedule::Geometric {
                min_temperature, ..
            } => temperature <= min_temperature,
        }
    }
}

/// Configuration for Simulated Annealing.
///
/// # Examples
///
/// ```
/// use u_queens::sa::{CoolingSchedule, SaConfig};
///
/// let config = SaConfig::default()
///     .with_cooling(CoolingSchedule::Harmonic { offset: 0.0005 })
///     .with_stop_on_solution(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Cooling schedule.
    pub cooling: CoolingSchedule,

    /// Maximum number of neighbor draws. 0 = no limit beyond the schedule.
    pub max_steps: usize,

    /// Stop as soon as the current board has no conflicts.
    ///
    /// Off by default: the run continues until the schedule freezes and
    /// reports whatever board it is on at that point.
    pub stop_on_solution: bool,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            cooling: CoolingSchedule::default(),
            max_steps: 0,
            stop_on_solution: false,
        }
    }
}

impl SaConfig {
    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }

    pub fn with_stop_on_solution(mut self, stop: bool) -> Self {
        self.stop_on_solution = stop;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        match self.cooling {
            CoolingSchedule::Harmonic { offset } => {
                if !(offset > 0.0 && offset.is_finite()) {
                    return Err(QueensError::InvalidConfig(format!(
                        "harmonic offset must be positive and finite, got {offset}"
                    )));
                }
            }
            CoolingSchedule::Geometric {
                initial_temperature,
                alpha,
                min_temperature,
            } => {
                if !(initial_temperature > 0.0 && initial_temperature.is_finite()) {
                    return Err(QueensError::InvalidConfig(format!(
                        "initial_temperature must be positive and finite, got {initial_temperature}"
                    )));
                }
                if !(min_temperature > 0.0 && min_temperature.is_finite()) {
                    return Err(QueensError::InvalidConfig(format!(
                        "min_temperature must be positive and finite, got {min_temperature}"
                    )));
                }
                if min_temperature >= initial_temperature {
                    return Err(QueensError::InvalidConfig(
                        "min_temperature must be less than initial_temperature".into(),
                    ));
                }
                if !(alpha > 0.0 && alpha < 1.0) {
                    return Err(QueensError::InvalidConfig(format!(
                        "geometric alpha must be in (0, 1), got {alpha}"
                    )));
                }
            }
        }
        Ok(())
    }
}
