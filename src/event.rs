// SPDX-License-Identifier: MIT OR Apache-2.0

//! The log event record.

use crate::severity::Severity;
use crate::tier::Tier;
use crate::value::{ArgValue, Args};

/// The call site a log event was produced from.
///
/// Both fields are opaque caller-supplied strings; this crate does not
/// attempt to truncate or otherwise interpret the file path. The
/// [`callsite!`](crate::callsite) macro captures both from the surrounding
/// code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
}

impl CallSite {
    pub const fn new(file: &'static str, function: &'static str) -> Self {
        Self { file, function }
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn function(&self) -> &'static str {
        self.function
    }
}

/**
A single log event.

Events are assembled with the consuming `with_*` methods and are immutable
once handed to a [`Logger`](crate::Logger):

```rust
use loglater::{LogEvent, Severity, Tier, callsite};

let event = LogEvent::new(Severity::Warning, callsite!())
    .with_message("cache miss")
    .with_arg("key", "user:42")
    .with_tier(Tier::Verbose);
```
*/
#[derive(Debug)]
pub struct LogEvent {
    severity: Severity,
    message: Option<String>,
    args: Args,
    callsite: CallSite,
    tier: Tier,
}

impl LogEvent {
    /// Creates an event with no message, no arguments, and the `Regular` tier.
    pub fn new(severity: Severity, callsite: CallSite) -> Self {
        Self {
            severity,
            message: None,
            args: Args::new(),
            callsite,
            tier: Tier::Regular,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<ArgValue>) -> Self {
        self.args.insert(key, value);
        self
    }

    pub fn with_args(mut self, args: Args) -> Self {
        self.args = args;
        self
    }

    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn args(&self) -> &Args {
        &self.args
    }

    pub fn callsite(&self) -> CallSite {
        self.callsite
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }
}

/*
Boilerplate notes for LogEvent:

IMPLEMENTED:
- Debug: Derived - essential for diagnostics

NOT IMPLEMENTED:
- Clone: Severity's error payload is unclonable; deferred emission shares
  events behind an Arc instead
- PartialEq/Eq/Hash: follows from Severity
- Default: an event without a severity or call site is not meaningful

AUTOMATIC:
- Send/Sync: all fields are Send + Sync, which the deferred scheduler
  relies on to move events to the watcher thread
*/
