//! Hill climbing configuration.

/// Configuration for hill climbing.
///
/// Hill climbing always terminates on its own because every accepted move
/// strictly raises the evaluation; `max_steps` is only an extra budget.
///
/// # Examples
///
/// ```
/// use u_queens::hill::HillConfig;
///
/// let config = HillConfig::default().with_max_steps(50);
/// assert_eq!(config.max_steps, 50);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillConfig {
    /// Maximum number of accepted moves. 0 = no limit.
    pub max_steps: usize,
}

impl HillConfig {
    pub fn with_max_steps(mut self, n: usize) -> Self {
        self.max_steps = n;
        self
    }
}
