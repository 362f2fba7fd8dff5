// SPDX-License-Identifier: MIT OR Apache-2.0
use crate::record::LogRecord;
use crate::sink::Sink;

/**
The reference sink: writes each record to standard output.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StdoutSink {}

impl StdoutSink {
    pub const fn new() -> Self {
        Self {}
    }
}

impl Sink for StdoutSink {
    fn write_line(&self, record: LogRecord) {
        use std::io::Write;
        // Locking serializes concurrent emissions; failures are ignored
        // since logging is a best-effort aid.
        let mut lock = std::io::stdout().lock();
        for part in record.parts {
            let _ = lock.write_all(part.as_bytes());
        }
        let _ = lock.write_all(b"\n");
    }
}

/*
Boilerplate notes for StdoutSink:

- Debug/Clone/Copy/PartialEq/Eq/Hash/Default: Derived - all fine for a
  zero-sized struct
- Display: no meaningful representation
- Send/Sync: automatic for a zero-sized struct
*/
