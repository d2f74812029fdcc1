//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{QueensError, Result};

/// Configuration for the Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_queens::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 8);
/// assert_eq!(config.selection, Selection::Roulette);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_queens::ga::{GaConfig, Selection};
///
/// let config = GaConfig::for_board_size(20)
///     .with_selection(Selection::Tournament(3))
///     .with_max_generations(2_000)
///     .with_time_limit_ms(500);
/// assert_eq!(config.population_size, 40);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of boards in each generation.
    pub population_size: usize,

    /// Maximum number of generations. 0 = run until a solution appears.
    pub max_generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Probability of mutating each child (0.0–1.0).
    pub mutation_rate: f64,

    /// Optional wall-clock limit in milliseconds, checked once per generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 8,
            max_generations: 10_000,
            selection: Selection::default(),
            mutation_rate: 0.5,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Default configuration with the population scaled to the board.
    ///
    /// - `n ≤ 8` → 8 boards
    /// - `n > 8` → `2n` boards, at most 200
    pub fn for_board_size(n: usize) -> Self {
        let population_size = if n <= 8 { 8 } else { (2 * n).min(200) };
        Self {
            population_size,
            ..Self::default()
        }
    }

    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(QueensError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(QueensError::InvalidConfig(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.time_limit_ms == Some(0) {
            return Err(QueensError::InvalidConfig(
                "time_limit_ms must be positive or None".into(),
            ));
        }
        if let Selection::Tournament(0) = self.selection {
            return Err(QueensError::InvalidConfig(
                "tournament size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
