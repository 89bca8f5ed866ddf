//! No-op logger implementation

use std::fmt::Display;

use super::traits::Logger;

/// A logger that does nothing
///
/// Useful for callers that decide to proceed without a log file when
/// [`crate::create`] fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl NoOpLogger {
    /// Create a new no-op logger
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NoOpLogger {
    fn dev(&self, _values: &[&dyn Display]) {}
    fn debug(&self, _values: &[&dyn Display]) {}
    fn info(&self, _values: &[&dyn Display]) {}
    fn warn(&self, _values: &[&dyn Display]) {}
    fn error(&self, _values: &[&dyn Display]) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::SharedLogger;
    use std::sync::Arc;

    #[test]
    fn test_noop_logger() {
        let logger: SharedLogger = Arc::new(NoOpLogger::new());

        // These should all do nothing without panicking
        logger.dev(&[&"dev message"]);
        logger.debug(&[&"debug message"]);
        logger.info(&[&"info message"]);
        logger.warn(&[&"warn message"]);
        logger.error(&[&"error message"]);
    }
}
