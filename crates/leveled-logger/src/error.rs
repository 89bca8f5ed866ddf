//! Logger error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or configuring a logger
///
/// Emission itself never fails: write errors on the sinks are dropped.
#[derive(Error, Debug)]
pub enum LoggerError {
    /// Level outside 1..=5
    #[error("Invalid log level {0}, should be in range from 1 to 5")]
    InvalidLevel(i64),

    /// A file (log or config) could not be opened, read or written
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Flushing the sinks failed
    #[error("Flush error: {0}")]
    Flush(#[source] std::io::Error),

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LoggerError {
    /// Create an open-failure error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type LoggerResult<T> = Result<T, LoggerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = LoggerError::io("/root/app.log", cause);
        assert!(err.to_string().contains("/root/app.log"));
        assert!(err.to_string().contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_level_message() {
        let err = LoggerError::InvalidLevel(9);
        assert_eq!(err.to_string(), "Invalid log level 9, should be in range from 1 to 5");
    }
}
