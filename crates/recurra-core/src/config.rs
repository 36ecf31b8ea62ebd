use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE, DEFAULT_MAX_PERIODS, DEFAULT_OCCURRENCE_LIMIT, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub expansion: ExpansionConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpansionConfig {
    /// Consecutive recurrence periods a search may visit without a match.
    pub max_periods: u32,
    /// Occurrence count used when the caller gives none.
    pub default_limit: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `recurra.toml` and `RECURRA__*` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating the resulting values fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        settings.validate()?;
        tracing::debug!(
            max_periods = settings.expansion.max_periods,
            default_limit = settings.expansion.default_limit,
            "Loaded expansion settings"
        );
        Ok(settings)
    }

    /// ## Summary
    /// Returns a configuration builder seeded with the default values.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("expansion.max_periods", i64::from(DEFAULT_MAX_PERIODS))?
            .set_default(
                "expansion.default_limit",
                i64::try_from(DEFAULT_OCCURRENCE_LIMIT)?,
            )?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive expansion.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero iteration cap or a
    /// blank log level.
    pub fn validate(&self) -> CoreResult<()> {
        if self.expansion.max_periods == 0 {
            return Err(CoreError::InvalidConfiguration(
                "expansion.max_periods must be greater than zero".to_string(),
            ));
        }
        if self.logging.level.trim().is_empty() {
            return Err(CoreError::InvalidConfiguration(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and `recurra.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}
