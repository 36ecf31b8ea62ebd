use recurra_core::config::ExpansionConfig;
use recurra_core::constants::DEFAULT_MAX_PERIODS;

/// Options for recurrence expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionOptions {
    /// Consecutive rule periods a walk may visit without a kept occurrence.
    pub max_periods: u32,
}

impl Default for ExpansionOptions {
    fn default() -> Self {
        Self {
            max_periods: DEFAULT_MAX_PERIODS,
        }
    }
}

impl ExpansionOptions {
    /// Sets the period cap.
    #[must_use]
    pub fn with_max_periods(mut self, max: u32) -> Self {
        self.max_periods = max;
        self
    }
}

impl From<&ExpansionConfig> for ExpansionOptions {
    fn from(config: &ExpansionConfig) -> Self {
        Self::default().with_max_periods(config.max_periods)
    }
}
