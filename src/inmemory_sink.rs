// SPDX-License-Identifier: MIT OR Apache-2.0

//! An in-memory sink for testing.
//!
//! Captures rendered lines in memory instead of writing them to stdout,
//! so tests can assert on exactly what was (and was not) emitted.

use crate::record::LogRecord;
use crate::sink::Sink;
use std::sync::Mutex;

/// A sink that stores each line in a `Vec<String>`.
///
/// ```rust
/// use loglater::{Config, InMemorySink, LogEvent, Logger, Severity, callsite};
/// use std::sync::Arc;
///
/// let sink = Arc::new(InMemorySink::new());
/// let logger = Logger::new(Arc::new(Config::default()), sink.clone());
///
/// logger.log(LogEvent::new(Severity::Info, callsite!()).with_message("hello"));
///
/// let lines = sink.drain_lines();
/// assert_eq!(lines.len(), 1);
/// assert!(lines[0].contains("\"hello\""));
/// ```
#[derive(Debug, Default)]
pub struct InMemorySink {
    lines: Mutex<Vec<String>>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Returns all captured lines, clearing the internal buffer.
    pub fn drain_lines(&self) -> Vec<String> {
        let mut lines = self.lines.lock().unwrap();
        std::mem::take(&mut *lines)
    }
}

impl Sink for InMemorySink {
    fn write_line(&self, record: LogRecord) {
        let line = record.to_string();
        let mut lines = self.lines.lock().unwrap();
        lines.push(line);
    }
}

/*
Boilerplate notes for InMemorySink:

- Clone: NOT implemented - a cloned sink silently capturing to a different
  buffer is a footgun in tests
- PartialEq/Hash: NOT implemented - unclear semantics for a capture buffer
- Send/Sync: automatic via the Mutex, required by the Sink trait
*/
