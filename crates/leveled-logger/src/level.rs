//! Severity levels

use std::fmt;
use std::str::FromStr;

use crate::error::LoggerError;

/// Log severity, ordered from least to most verbose
///
/// `Error(1) < Warn(2) < Info(3) < Debug(4) < Dev(5)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Dev = 5,
}

impl Severity {
    /// All levels in rank order
    pub const ALL: [Severity; 5] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
        Severity::Dev,
    ];

    /// Level used when an out-of-range level is requested
    pub const DEFAULT: Severity = Severity::Debug;

    /// Numeric rank (1..=5)
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Tag written in front of file lines
    pub fn file_prefix(self) -> &'static str {
        match self {
            Severity::Dev => "[DEV] ",
            Severity::Debug => "[DEBUG] ",
            Severity::Info => "[INFO] ",
            Severity::Warn => "[WARN] ",
            Severity::Error => "[ERROR] ",
        }
    }

    /// Tag written in front of console lines
    pub fn console_prefix(self) -> &'static str {
        match self {
            Severity::Dev => "DEVELOPMENT: ",
            Severity::Debug => "DEBUG: ",
            Severity::Info => "INFO: ",
            Severity::Warn => "WARN: ",
            Severity::Error => "ERROR: ",
        }
    }

    /// Upper-case level name
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Dev => "DEV",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Severity whose file sink receives lines logged at `self`.
    ///
    /// Dev lines land in the debug sink and are tagged `[DEBUG]`.
    pub fn file_route(self) -> Severity {
        match self {
            Severity::Dev => Severity::Debug,
            other => other,
        }
    }

    pub(crate) fn slot(self) -> usize {
        self as usize - 1
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i64> for Severity {
    type Error = LoggerError;

    fn try_from(level: i64) -> Result<Self, LoggerError> {
        match level {
            1 => Ok(Severity::Error),
            2 => Ok(Severity::Warn),
            3 => Ok(Severity::Info),
            4 => Ok(Severity::Debug),
            5 => Ok(Severity::Dev),
            other => Err(LoggerError::InvalidLevel(other)),
        }
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(level) = trimmed.parse::<i64>() {
            return Severity::try_from(level);
        }
        match trimmed.to_lowercase().as_str() {
            "dev" | "development" => Ok(Severity::Dev),
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            _ => Err(LoggerError::config(format!("unknown log level: {}", trimmed))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Severity::Error < Severity::Warn);
        assert!(Severity::Warn < Severity::Info);
        assert!(Severity::Info < Severity::Debug);
        assert!(Severity::Debug < Severity::Dev);
        assert_eq!(Severity::DEFAULT.rank(), 4);
    }

    #[test]
    fn test_try_from_range() {
        for (i, severity) in Severity::ALL.iter().enumerate() {
            assert_eq!(Severity::try_from(i as i64 + 1).unwrap(), *severity);
        }
        assert!(matches!(Severity::try_from(0), Err(LoggerError::InvalidLevel(0))));
        assert!(matches!(Severity::try_from(6), Err(LoggerError::InvalidLevel(6))));
        assert!(matches!(Severity::try_from(-3), Err(LoggerError::InvalidLevel(-3))));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(Severity::Dev.file_prefix(), "[DEV] ");
        assert_eq!(Severity::Dev.console_prefix(), "DEVELOPMENT: ");
        assert_eq!(Severity::Error.file_prefix(), "[ERROR] ");
        assert_eq!(Severity::Error.console_prefix(), "ERROR: ");
    }

    #[test]
    fn test_dev_routes_to_debug_file_sink() {
        assert_eq!(Severity::Dev.file_route(), Severity::Debug);
        assert_eq!(Severity::Info.file_route(), Severity::Info);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warn);
        assert_eq!("DEV".parse::<Severity>().unwrap(), Severity::Dev);
        assert_eq!(" 3 ".parse::<Severity>().unwrap(), Severity::Info);
        assert!("9".parse::<Severity>().is_err());
        assert!(matches!(
            "verbose".parse::<Severity>(),
            Err(LoggerError::Config(message)) if message == "unknown log level: verbose"
        ));
    }
}
