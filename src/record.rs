// SPDX-License-Identifier: MIT OR Apache-2.0

//! The rendered form of a log event.

use std::fmt::Display;

/**
A rendered log line, stored as parts.

The formatter appends parts progressively instead of concatenating into one
string; parts are only joined when a [`Sink`](crate::Sink) writes the line.
The record is passed to sinks by value, so no buffer is shared between
threads.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LogRecord {
    pub(crate) parts: Vec<String>,
}

impl LogRecord {
    pub fn new() -> Self {
        Self { parts: Vec::new() }
    }

    /// Appends a borrowed part to the record.
    pub fn push(&mut self, part: &str) {
        self.parts.push(part.to_string());
    }

    /// Appends an already-owned part to the record.
    ///
    /// Useful for parts constructed in the process of rendering.
    pub fn push_owned(&mut self, part: String) {
        self.parts.push(part);
    }
}

impl Display for LogRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for part in &self.parts {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/*
Boilerplate notes for LogRecord:

IMPLEMENTED:
- Debug/Clone/PartialEq/Eq/Hash: Derived
- Default: empty record
- Display: joins the parts for output

NOT IMPLEMENTED:
- Copy: Vec<String> is heap-allocated
- Ord: no meaningful ordering for rendered lines
*/
