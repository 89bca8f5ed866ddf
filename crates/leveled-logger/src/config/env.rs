//! Environment overrides

use std::env;
use std::path::PathBuf;

use super::LoggerConfig;
use crate::level::Severity;

/// Overrides the log file path
pub const PATH_ENV: &str = "LEVELED_LOG_PATH";

/// Overrides the level (1-5 or a level name)
pub const LEVEL_ENV: &str = "LEVELED_LOG_LEVEL";

/// Parse a level setting into a raw level.
///
/// Names and digits in range map to their rank. Other integers pass through
/// unchanged and anything else becomes 0, so the logger falls back to its
/// default level with a warning instead of failing.
pub fn parse_level(value: &str) -> i64 {
    if let Ok(severity) = value.parse::<Severity>() {
        return i64::from(severity.rank());
    }
    value.trim().parse::<i64>().unwrap_or(0)
}

impl LoggerConfig {
    /// Apply `LEVELED_LOG_PATH` and `LEVELED_LOG_LEVEL` from the process environment
    pub fn with_env(self) -> Self {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(path) = get(PATH_ENV) {
            self.path = PathBuf::from(path);
        }
        if let Some(level) = get(LEVEL_ENV) {
            self.level = parse_level(&level);
        }
        self
    }
}
