//! Logger trait definition

use std::fmt::Display;
use std::sync::Arc;

use crate::level::Severity;

/// Capability set "can log at severity S"
///
/// Each method takes the values to log; they are joined with single spaces.
/// Whether anything is emitted is up to the implementation.
///
/// Implementations:
/// - `LeveledLogger`: console + file, gated by a shared threshold
/// - `NoOpLogger`: discards everything
pub trait Logger: Send + Sync {
    /// Log a development message (level 5)
    fn dev(&self, values: &[&dyn Display]);

    /// Log a debug message (level 4)
    fn debug(&self, values: &[&dyn Display]);

    /// Log an info message (level 3)
    fn info(&self, values: &[&dyn Display]);

    /// Log a warning message (level 2)
    fn warn(&self, values: &[&dyn Display]);

    /// Log an error message (level 1)
    fn error(&self, values: &[&dyn Display]);

    /// Log at a severity chosen at runtime
    fn log(&self, severity: Severity, values: &[&dyn Display]) {
        match severity {
            Severity::Dev => self.dev(values),
            Severity::Debug => self.debug(values),
            Severity::Info => self.info(values),
            Severity::Warn => self.warn(values),
            Severity::Error => self.error(values),
        }
    }
}

/// Type alias for a boxed logger
pub type BoxedLogger = Box<dyn Logger>;

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;

impl<T: Logger + ?Sized> Logger for Arc<T> {
    fn dev(&self, values: &[&dyn Display]) {
        (**self).dev(values)
    }

    fn debug(&self, values: &[&dyn Display]) {
        (**self).debug(values)
    }

    fn info(&self, values: &[&dyn Display]) {
        (**self).info(values)
    }

    fn warn(&self, values: &[&dyn Display]) {
        (**self).warn(values)
    }

    fn error(&self, values: &[&dyn Display]) {
        (**self).error(values)
    }
}

/// Convenience macros for variadic logging
///
/// ```
/// use leveled_logger::{log_info, Logger, NoOpLogger};
///
/// let logger = NoOpLogger::new();
/// let user = "alice";
/// log_info!(logger, "login", user, 42);
/// ```
#[macro_export]
macro_rules! log_dev {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            $logger.dev(&[$(&$value as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            $logger.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            $logger.info(&[$(&$value as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            $logger.warn(&[$(&$value as &dyn ::std::fmt::Display),*])
        }
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $value:expr)* $(,)?) => {
        {
            use $crate::Logger as _;
            $logger.error(&[$(&$value as &dyn ::std::fmt::Display),*])
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct RecordingLogger {
        calls: Mutex<Vec<(Severity, String)>>,
    }

    impl RecordingLogger {
        fn record(&self, severity: Severity, values: &[&dyn Display]) {
            self.calls
                .lock()
                .push((severity, crate::sink::join_values(values)));
        }
    }

    impl Logger for RecordingLogger {
        fn dev(&self, values: &[&dyn Display]) {
            self.record(Severity::Dev, values)
        }

        fn debug(&self, values: &[&dyn Display]) {
            self.record(Severity::Debug, values)
        }

        fn info(&self, values: &[&dyn Display]) {
            self.record(Severity::Info, values)
        }

        fn warn(&self, values: &[&dyn Display]) {
            self.record(Severity::Warn, values)
        }

        fn error(&self, values: &[&dyn Display]) {
            self.record(Severity::Error, values)
        }
    }

    #[test]
    fn test_log_dispatches_by_severity() {
        let logger = RecordingLogger::default();
        for severity in Severity::ALL {
            logger.log(severity, &[&severity]);
        }
        let calls = logger.calls.lock();
        assert_eq!(calls.len(), 5);
        for (severity, text) in calls.iter() {
            assert_eq!(text, severity.as_str());
        }
    }

    #[test]
    fn test_macros_join_values() {
        let logger = Arc::new(RecordingLogger::default());
        let count = 3;
        log_warn!(logger, "retrying", count, "times");
        log_error!(logger);
        log_dev!(logger, 1.5_f64,);

        let calls = logger.calls.lock();
        assert_eq!(calls[0], (Severity::Warn, "retrying 3 times".to_string()));
        assert_eq!(calls[1], (Severity::Error, String::new()));
        assert_eq!(calls[2], (Severity::Dev, "1.5".to_string()));
    }
}
