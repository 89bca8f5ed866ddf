//! Prefixed, timestamped line sinks
//!
//! A [`Sink`] owns nothing but a prefix and a handle to a shared writer.
//! Several sinks may point at the same writer (the five file sinks share one
//! file). Each line is formatted in full before the writer lock is taken, so
//! concurrent writes never interleave within a line.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Timestamp layout written after the prefix, e.g. `2024/03/09 14:05:59`
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Writer shared between sinks
pub type SharedWriter = Arc<Mutex<Box<dyn Write + Send>>>;

/// Wrap a writer so it can be shared between sinks
pub fn shared(writer: impl Write + Send + 'static) -> SharedWriter {
    Arc::new(Mutex::new(Box::new(writer)))
}

/// Shared handle to the process standard output
pub fn stdout_writer() -> SharedWriter {
    shared(io::stdout())
}

/// Shared handle to the process standard error
pub fn stderr_writer() -> SharedWriter {
    shared(io::stderr())
}

/// Current local time in [`TIMESTAMP_FORMAT`]
pub fn timestamp() -> String {
    chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Join values with single spaces, the way a print-line call would
pub fn join_values(values: &[&dyn fmt::Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&value.to_string());
    }
    out
}

/// A writer bound to a fixed prefix
#[derive(Clone)]
pub struct Sink {
    prefix: &'static str,
    writer: SharedWriter,
}

impl Sink {
    pub fn new(prefix: &'static str, writer: SharedWriter) -> Self {
        Self { prefix, writer }
    }

    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Format `<prefix><timestamp> <message>` into one line
    pub fn format_line(&self, message: &str) -> String {
        format!("{}{} {}\n", self.prefix, timestamp(), message)
    }

    /// Write one line. Errors are dropped.
    pub fn write(&self, message: &str) {
        let line = self.format_line(message);
        let mut writer = self.writer.lock();
        let _ = writer.write_all(line.as_bytes());
    }

    /// Flush the underlying writer
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    /// Whether this sink writes to the same writer as `other`
    pub fn shares_writer_with(&self, other: &Sink) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("prefix", &self.prefix).finish()
    }
}

/// In-memory writer for capturing console output
///
/// Clones share the same buffer, so a clone can be handed to a logger while
/// this handle is kept for reading.
///
/// # Example
///
/// ```
/// use leveled_logger::sink::{shared, MemoryWriter, Sink};
///
/// let buffer = MemoryWriter::new();
/// let sink = Sink::new("INFO: ", shared(buffer.clone()));
/// sink.write("hello");
/// assert!(buffer.contents().starts_with("INFO: "));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Written lines, without terminators
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
