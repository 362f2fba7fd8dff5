//SPDX-License-Identifier: MIT OR Apache-2.0
/*!
# loglater

loglater is a small process-local logging helper with one distinctive
feature: deferred ("debounced") emissions for flagging operations that took
too long.

# The problem

When an operation hangs, the log usually tells you nothing: the line that
would have incriminated it was never written, because the code after the
operation never ran. Instrumenting both the start and the end of every
suspicious call is tedious and noisy: the start lines drown out everything
else on the happy path.

loglater's answer is the `pre_log`/`post_log` pair. `pre_log` schedules a
log event to fire after a short delay, annotated with a `[TIMEOUT]` marker.
`post_log` cancels that pending emission and logs the event normally. An
operation that finishes in time produces exactly one ordinary line; an
operation that hangs produces exactly one `[TIMEOUT]` line, from a
background watcher thread, while the caller is still stuck.

```rust
use loglater::{Severity, post_log, pre_log};

let pending = pre_log!(Severity::Info, "loading profile");
// ... the call being watched ...
post_log(pending);
```

# Events

A [`LogEvent`] carries a [`Severity`] (`Info`, `Warning`, or `Error` with
an owned error cause), an optional message, an insertion-ordered list of
key-value arguments, a caller-supplied [`CallSite`], and a verbosity
[`Tier`]. Each event renders as a single human-readable line:

```text
Log Warning src/fetcher.rs myapp::fetcher::fetch "cache miss" [ key: "user:42", attempt: 2 ]
```

# Tiers

Three verbosity tiers gate emission: `Regular` < `Verbose` < `Loop`. An
event is emitted iff its tier is at or below the tier configured on the
logger; a `Loop`-tier event logged inside a hot loop costs one atomic load
when the configured tier is `Regular`.

# Configuration

A [`Logger`] is constructed from a shared [`Config`] (label prefix +
verbosity tier) and a [`Sink`] (the line-oriented output). [`Logger::global`]
is the process-wide default, writing to stdout; the crate-root functions
[`log`], [`pre_log`], and [`post_log`] go through it. Tests typically build
their own logger over an [`InMemorySink`].

# Concurrency

The deferred watcher thread is the only concurrent actor. It reads a
handle's cancelled flag exactly once, at fire time; if `post_log` races
with the fire and loses, a duplicate line is possible. That is accepted
behavior for a best-effort debug aid, not a failure mode.
*/

mod config;
mod deferred;
mod event;
mod inmemory_sink;
mod logger;
mod macros;
mod record;
mod render;
mod severity;
mod sink;
mod stdout_sink;
mod tier;
mod value;

pub use config::Config;
pub use deferred::DeferredLog;
pub use event::{CallSite, LogEvent};
pub use inmemory_sink::InMemorySink;
pub use logger::Logger;
pub use record::LogRecord;
pub use severity::Severity;
pub use sink::Sink;
pub use stdout_sink::StdoutSink;
pub use tier::Tier;
pub use value::{ArgValue, Args};

use std::time::Duration;

/// How long a deferred emission waits before firing with the `[TIMEOUT]`
/// marker. A tunable constant, not a correctness knob.
pub const DEFER_DELAY: Duration = Duration::from_millis(500);

/// Logs `event` immediately through [`Logger::global`].
pub fn log(event: LogEvent) {
    Logger::global().log(event)
}

/// Schedules a deferred emission of `event` through [`Logger::global`].
pub fn pre_log(event: LogEvent) -> DeferredLog {
    Logger::global().pre_log(event)
}

/// Cancels the deferred emission and logs its event immediately through
/// [`Logger::global`].
pub fn post_log(deferred: DeferredLog) {
    Logger::global().post_log(deferred)
}

extern crate self as loglater;
