// SPDX-License-Identifier: MIT OR Apache-2.0

//! The logger: config + sink, and the three logging operations.

use crate::config::Config;
use crate::deferred::DeferredLog;
use crate::event::LogEvent;
use crate::render::render;
use crate::sink::Sink;
use crate::stdout_sink::StdoutSink;
use std::sync::{Arc, OnceLock};

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/**
A logger bound to a [`Config`] and a [`Sink`].

The three operations are:

1. [`log`](Logger::log): render and emit immediately.
2. [`pre_log`](Logger::pre_log): schedule a deferred emission that fires
   with a `[TIMEOUT]` marker after [`DEFER_DELAY`](crate::DEFER_DELAY)
   unless cancelled first.
3. [`post_log`](Logger::post_log): cancel a deferred emission and emit the
   event normally; the happy path of an operation that finished in time.

Loggers are cheap to clone; clones share the config and the sink.

```rust
use loglater::{LogEvent, Logger, Severity, callsite};

let logger = Logger::global();
let pending = logger.pre_log(
    LogEvent::new(Severity::Info, callsite!()).with_message("fetching profile"),
);
// ... the operation being watched ...
logger.post_log(pending);
```
*/
#[derive(Debug, Clone)]
pub struct Logger {
    config: Arc<Config>,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub fn new(config: Arc<Config>, sink: Arc<dyn Sink>) -> Self {
        Self { config, sink }
    }

    /// The process-wide default logger: default [`Config`], stdout sink.
    ///
    /// Reconfigure it through its config:
    ///
    /// ```rust
    /// use loglater::{Logger, Tier};
    ///
    /// Logger::global().config().set_tier(Tier::Verbose);
    /// ```
    pub fn global() -> &'static Logger {
        GLOBAL_LOGGER
            .get_or_init(|| Logger::new(Arc::new(Config::default()), Arc::new(StdoutSink::new())))
    }

    /// The config this logger reads on every emission.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Renders and emits the event immediately.
    pub fn log(&self, event: LogEvent) {
        self.emit(&event, false);
    }

    /// Schedules a deferred emission of `event` and returns its handle.
    ///
    /// Never blocks; the emission fires from a background watcher thread
    /// after [`DEFER_DELAY`](crate::DEFER_DELAY) unless the handle is
    /// cancelled first via [`post_log`](Logger::post_log).
    pub fn pre_log(&self, event: LogEvent) -> DeferredLog {
        DeferredLog::schedule(self.clone(), event, crate::DEFER_DELAY)
    }

    /// Cancels the deferred emission and emits the event normally.
    pub fn post_log(&self, deferred: DeferredLog) {
        deferred.cancel();
        self.emit(deferred.event(), false);
    }

    /// Single emission path: tier gate, render, write.
    ///
    /// Gating happens before rendering, so suppressed events cost nothing
    /// beyond the tier comparison.
    pub(crate) fn emit(&self, event: &LogEvent, timed_out: bool) {
        if event.tier() > self.config.tier() {
            return;
        }
        let record = render(event, &self.config.prefix(), timed_out);
        self.sink.write_line(record);
    }
}
