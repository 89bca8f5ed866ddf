//! Reading persisted log lines back

use chrono::NaiveDateTime;

use crate::level::Severity;
use crate::sink::TIMESTAMP_FORMAT;

/// Width of a rendered timestamp
const TIMESTAMP_LEN: usize = 19;

/// One parsed line of a log file: `[LEVEL] <timestamp> <message>`
///
/// Lines are not escaped. A message containing `\n` is split across
/// several physical lines, and only the first carries the tag and timestamp,
/// so reading it back yields just the text before the first newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub severity: Severity,
    pub timestamp: NaiveDateTime,
    pub message: String,
}

impl LogLine {
    /// Parse a single file line. Returns `None` for anything not written by a file sink.
    pub fn parse(line: &str) -> Option<LogLine> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let (severity, rest) = Severity::ALL.iter().find_map(|severity| {
            line.strip_prefix(severity.file_prefix())
                .map(|rest| (*severity, rest))
        })?;

        let stamp = rest.get(..TIMESTAMP_LEN)?;
        let timestamp = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;
        let message = rest[TIMESTAMP_LEN..].strip_prefix(' ')?;

        Some(LogLine {
            severity,
            timestamp,
            message: message.to_string(),
        })
    }

    /// Parse every recognizable line of a log file's contents.
    ///
    /// Continuation lines of multi-line messages are skipped.
    pub fn parse_all(contents: &str) -> Vec<LogLine> {
        contents.lines().filter_map(LogLine::parse).collect()
    }
}
