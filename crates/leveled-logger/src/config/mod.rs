//! Logger configuration
//!
//! Settings are resolved from, lowest to highest precedence:
//! - built-in defaults (`<temp dir>/leveled.log`, level 4)
//! - a YAML file (`~/.config/leveled-logger/config.yaml` by default)
//! - environment variables (`LEVELED_LOG_PATH`, `LEVELED_LOG_LEVEL`)

mod env;
mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoggerResult;
use crate::level::Severity;

pub use env::{parse_level, LEVEL_ENV, PATH_ENV};

/// Resolved logger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Log file path
    pub path: PathBuf,
    /// Raw level; validated when the logger is created
    pub level: i64,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            path: Self::default_log_path(),
            level: i64::from(Severity::DEFAULT.rank()),
        }
    }
}

impl LoggerConfig {
    pub fn new(path: impl Into<PathBuf>, level: i64) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// Default log file location
    pub fn default_log_path() -> PathBuf {
        std::env::temp_dir().join("leveled.log")
    }

    /// Resolve defaults, the user config file, then the environment
    pub fn load() -> LoggerResult<Self> {
        Ok(Self::from_yaml_file(Self::user_config_path())?.with_env())
    }

    /// Resolve defaults, the YAML file at `path`, then overrides from `lookup`
    pub fn load_from(
        path: impl AsRef<Path>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> LoggerResult<Self> {
        let config = Self::from_yaml_file(path)?;
        Ok(config.with_overrides(lookup))
    }
}
