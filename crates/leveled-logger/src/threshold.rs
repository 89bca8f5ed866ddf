//! Shared severity threshold
//!
//! Every logger reads its threshold through a [`Threshold`] handle. Cloned
//! handles share the same value, so building a second logger on a handle
//! changes what all earlier loggers on that handle emit. [`Threshold::global`]
//! is the process-wide handle used by [`crate::create`].

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::level::Severity;

/// Process-wide threshold, unset (0) until the first logger is created
static GLOBAL_THRESHOLD: Lazy<Threshold> = Lazy::new(Threshold::new);

/// Handle to a threshold value shared between loggers
#[derive(Debug, Clone, Default)]
pub struct Threshold {
    level: Arc<AtomicU8>,
}

impl Threshold {
    /// Create a new, unset threshold not shared with anything else
    pub fn new() -> Self {
        Self {
            level: Arc::new(AtomicU8::new(0)),
        }
    }

    /// Create a new threshold already set to `severity`
    pub fn with_severity(severity: Severity) -> Self {
        let threshold = Self::new();
        threshold.set(severity);
        threshold
    }

    /// The process-wide threshold
    pub fn global() -> Threshold {
        GLOBAL_THRESHOLD.clone()
    }

    /// Store a new threshold
    pub fn set(&self, severity: Severity) {
        self.level.store(severity.rank(), Ordering::Relaxed);
    }

    /// Raw threshold value, 0 while unset
    pub fn level(&self) -> u8 {
        self.level.load(Ordering::Relaxed)
    }

    /// Current threshold, `None` while unset
    pub fn severity(&self) -> Option<Severity> {
        Severity::try_from(i64::from(self.level())).ok()
    }

    /// Whether a call at `severity` emits under the current threshold
    pub fn allows(&self, severity: Severity) -> bool {
        let level = self.level();
        // Error is the only level compared with >=
        match severity {
            Severity::Dev => level > 4,
            Severity::Debug => level > 3,
            Severity::Info => level > 2,
            Severity::Warn => level > 1,
            Severity::Error => level >= 1,
        }
    }

    /// Whether two handles share the same value
    pub fn same_as(&self, other: &Threshold) -> bool {
        Arc::ptr_eq(&self.level, &other.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_threshold_allows_nothing() {
        let threshold = Threshold::new();
        assert_eq!(threshold.level(), 0);
        assert!(threshold.severity().is_none());
        for severity in Severity::ALL {
            assert!(!threshold.allows(severity));
        }
    }

    #[test]
    fn test_gating_table() {
        let threshold = Threshold::new();
        for level in Severity::ALL {
            threshold.set(level);
            for call in Severity::ALL {
                assert_eq!(
                    threshold.allows(call),
                    call <= level,
                    "call {} at threshold {}",
                    call,
                    level
                );
            }
        }
    }

    #[test]
    fn test_clones_share_value() {
        let threshold = Threshold::with_severity(Severity::Info);
        let other = threshold.clone();
        other.set(Severity::Error);
        assert_eq!(threshold.severity(), Some(Severity::Error));
        assert!(threshold.same_as(&other));
        assert!(!threshold.same_as(&Threshold::new()));
    }

    #[test]
    fn test_global_is_one_handle() {
        assert!(Threshold::global().same_as(&Threshold::global()));
    }
}
