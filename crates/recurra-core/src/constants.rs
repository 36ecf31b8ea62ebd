/// Upper bound on consecutive recurrence periods a search may visit without
/// finding a non-excluded occurrence.
///
/// A period is one step of the rule's frequency (a day, week, month or year
/// times the interval). Searches that find nothing within this many periods
/// in a row stop instead of looping.
pub const DEFAULT_MAX_PERIODS: u32 = 10_000;

/// Number of occurrences listed when a caller gives no limit.
pub const DEFAULT_OCCURRENCE_LIMIT: usize = 10;

/// Prefix for environment variable overrides, e.g. `RECURRA__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "RECURRA";

/// Optional configuration file, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "recurra.toml";
