//! Random search configuration.

use crate::error::{QueensError, Result};

/// Configuration for random resampling search.
///
/// # Examples
///
/// ```
/// use u_queens::random::RandomConfig;
///
/// let config = RandomConfig::default();
/// assert_eq!(config.max_iterations, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RandomConfig {
    /// Give up once this many boards have been evaluated.
    pub max_iterations: usize,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
        }
    }
}

impl RandomConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(QueensError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
