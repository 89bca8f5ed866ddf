//! Console + file leveled logger
//!
//! [`LeveledLogger`] holds one file sink per severity, all appending to the
//! same open file, and one console sink per severity. Dev, Debug, Info and
//! Warn lines go to standard output, Error lines to standard error.
//!
//! # Example
//!
//! ```no_run
//! use leveled_logger::{create, log_info, Logger};
//!
//! let logger = create("/var/log/app.log", 3)?;
//! log_info!(logger, "listening on port", 8080);
//! logger.debug(&[&"not emitted at level 3"]);
//! # Ok::<(), leveled_logger::LoggerError>(())
//! ```

use std::fmt::{self, Display};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::LoggerConfig;
use crate::error::{LoggerError, LoggerResult};
use crate::level::Severity;
use crate::sink::{join_values, shared, stderr_writer, stdout_writer, SharedWriter, Sink};
use crate::threshold::Threshold;
use crate::traits::Logger;

/// Create a logger on the process-wide threshold
///
/// `level` outside 1..=5 falls back to 4 (Debug) with a warning on standard
/// output. Fails only if `path` cannot be opened for appending. Every logger
/// created this way shares one threshold, so the last call wins.
pub fn create(path: impl AsRef<Path>, level: i64) -> LoggerResult<LeveledLogger> {
    LeveledLogger::builder(path.as_ref()).level(level).open()
}

/// Builder for [`LeveledLogger`]
pub struct LoggerBuilder {
    path: PathBuf,
    level: i64,
    threshold: Threshold,
    stdout: Option<SharedWriter>,
    stderr: Option<SharedWriter>,
}

impl LoggerBuilder {
    /// Start a builder for the given log file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            level: i64::from(Severity::DEFAULT.rank()),
            threshold: Threshold::global(),
            stdout: None,
            stderr: None,
        }
    }

    /// Start a builder from resolved configuration
    pub fn from_config(config: &LoggerConfig) -> Self {
        Self::new(config.path.clone()).level(config.level)
    }

    /// Raw level, validated on [`open`](Self::open)
    pub fn level(mut self, level: i64) -> Self {
        self.level = level;
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.level = i64::from(severity.rank());
        self
    }

    /// Threshold handle to set and read (defaults to [`Threshold::global`])
    pub fn threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    /// Replace standard output as the console destination
    pub fn stdout(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stdout = Some(shared(writer));
        self
    }

    /// Replace standard error as the console destination
    pub fn stderr(mut self, writer: impl Write + Send + 'static) -> Self {
        self.stderr = Some(shared(writer));
        self
    }

    /// Open the log file and build the logger
    pub fn open(self) -> LoggerResult<LeveledLogger> {
        let stdout = self.stdout.unwrap_or_else(stdout_writer);
        let stderr = self.stderr.unwrap_or_else(stderr_writer);

        let severity = match Severity::try_from(self.level) {
            Ok(severity) => severity,
            Err(_) => {
                notice(
                    &stdout,
                    &format!(
                        "Invalid log level, should be in range from 1 to 5, using default level: {}",
                        Severity::DEFAULT.rank()
                    ),
                );
                Severity::DEFAULT
            }
        };

        let file = match open_append(&self.path) {
            Ok(file) => file,
            Err(source) => {
                notice(&stdout, &format!("**** Error initiating Logger!! **** {}", source));
                return Err(LoggerError::io(self.path, source));
            }
        };

        let file = shared(file);
        let file_sinks = Severity::ALL.map(|level| Sink::new(level.file_prefix(), file.clone()));
        let console_sinks = Severity::ALL.map(|level| {
            let writer = match level {
                Severity::Error => stderr.clone(),
                _ => stdout.clone(),
            };
            Sink::new(level.console_prefix(), writer)
        });

        self.threshold.set(severity);

        Ok(LeveledLogger {
            path: self.path,
            threshold: self.threshold,
            file_sinks,
            console_sinks,
        })
    }
}

impl fmt::Debug for LoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerBuilder")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("threshold", &self.threshold)
            .finish()
    }
}

/// Logger writing to the console and a log file, gated by a shared threshold
pub struct LeveledLogger {
    path: PathBuf,
    threshold: Threshold,
    file_sinks: [Sink; 5],
    console_sinks: [Sink; 5],
}

impl LeveledLogger {
    /// Start building a logger for `path`
    pub fn builder(path: impl Into<PathBuf>) -> LoggerBuilder {
        LoggerBuilder::new(path)
    }

    /// Create a logger from resolved configuration, on the process-wide threshold
    pub fn from_config(config: &LoggerConfig) -> LoggerResult<Self> {
        LoggerBuilder::from_config(config).open()
    }

    /// Path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The threshold handle this logger reads
    pub fn threshold(&self) -> &Threshold {
        &self.threshold
    }

    /// Whether a call at `severity` would emit right now
    pub fn enabled(&self, severity: Severity) -> bool {
        self.threshold.allows(severity)
    }

    /// File sink receiving lines logged at `severity`
    pub fn file_sink(&self, severity: Severity) -> &Sink {
        &self.file_sinks[severity.file_route().slot()]
    }

    /// Console sink receiving lines logged at `severity`
    pub fn console_sink(&self, severity: Severity) -> &Sink {
        &self.console_sinks[severity.slot()]
    }

    fn emit(&self, severity: Severity, values: &[&dyn Display]) {
        if !self.threshold.allows(severity) {
            return;
        }
        let message = join_values(values);
        self.console_sink(severity).write(&message);
        self.file_sink(severity).write(&message);
    }

    /// Flush the file and console writers
    pub fn flush(&self) -> LoggerResult<()> {
        // All file sinks share one writer
        self.file_sinks[0].flush().map_err(LoggerError::Flush)?;
        self.console_sink(Severity::Info).flush().map_err(LoggerError::Flush)?;
        self.console_sink(Severity::Error).flush().map_err(LoggerError::Flush)?;
        Ok(())
    }

    /// Flush and drop this logger's handles to the log file.
    ///
    /// The file stays open while any [`Sink`] cloned from this logger is alive.
    pub fn close(self) -> LoggerResult<()> {
        self.flush()
    }
}

impl Logger for LeveledLogger {
    fn dev(&self, values: &[&dyn Display]) {
        self.emit(Severity::Dev, values);
    }

    fn debug(&self, values: &[&dyn Display]) {
        self.emit(Severity::Debug, values);
    }

    fn info(&self, values: &[&dyn Display]) {
        self.emit(Severity::Info, values);
    }

    fn warn(&self, values: &[&dyn Display]) {
        self.emit(Severity::Warn, values);
    }

    fn error(&self, values: &[&dyn Display]) {
        self.emit(Severity::Error, values);
    }
}

impl fmt::Debug for LeveledLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeveledLogger")
            .field("path", &self.path)
            .field("threshold", &self.threshold.level())
            .finish()
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }
    options.open(path)
}

/// Plain console line without prefix or timestamp
fn notice(writer: &SharedWriter, message: &str) {
    let mut writer = writer.lock();
    let _ = writeln!(writer, "{}", message);
}
