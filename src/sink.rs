// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::LogRecord;
use std::fmt::Debug;

/// A line-oriented output sink.
///
/// A sink receives exactly one [`LogRecord`] per emission and writes it as
/// a single line. Writes are best-effort; a sink must not panic if the
/// underlying stream is gone.
pub trait Sink: Debug + Send + Sync {
    /// Writes the record as one line.
    fn write_line(&self, record: LogRecord);
}

/*
Boilerplate notes.

# Sink

Clone on a trait object doesn't make sense; sinks are shared behind Arc.
PartialEq/Hash are unclear (data equality vs. provenance), so neither is
required. Send + Sync are required since the deferred scheduler emits from
its watcher thread.
*/
