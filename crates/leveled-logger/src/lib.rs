//! Leveled Logger
//!
//! A small synchronous logging facade. Each message goes to the console and
//! to an append-only log file, filtered by a severity threshold.
//!
//! ## Levels
//!
//! `Error(1) < Warn(2) < Info(3) < Debug(4) < Dev(5)`. A logger created at
//! level N emits calls at levels 1..=N. Dev, Debug, Info and Warn print to
//! standard output; Error prints to standard error.
//!
//! ## Shared threshold
//!
//! The threshold lives in a [`Threshold`] handle. [`create`] uses the
//! process-wide handle, so creating a second logger with a different level
//! changes what every logger created through [`create`] emits. Pass your own
//! handle to [`LeveledLogger::builder`] to keep loggers independent.
//!
//! ```no_run
//! use leveled_logger::{create, log_error, log_warn, Logger};
//!
//! let logger = create("service.log", 2)?;
//! log_warn!(logger, "queue depth", 950);
//! log_error!(logger, "worker", 3, "crashed");
//! logger.info(&[&"dropped: threshold is 2"]);
//! # Ok::<(), leveled_logger::LoggerError>(())
//! ```
//!
//! File lines look like `[WARN] 2024/03/09 14:05:59 queue depth 950` and can
//! be read back with [`LogLine::parse`].

pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod noop;
pub mod record;
pub mod sink;
pub mod threshold;
pub mod traits;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use level::Severity;
pub use logger::{create, LeveledLogger, LoggerBuilder};
pub use noop::NoOpLogger;
pub use record::LogLine;
pub use sink::{MemoryWriter, Sink};
pub use threshold::Threshold;
pub use traits::{BoxedLogger, Logger, SharedLogger};
