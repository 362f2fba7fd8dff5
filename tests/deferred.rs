// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deferred emission through the public API, at the production delay.

use loglater::{Config, DEFER_DELAY, InMemorySink, LogEvent, Logger, Severity, callsite};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn capturing_logger() -> (Logger, Arc<InMemorySink>) {
    let sink = Arc::new(InMemorySink::new());
    let logger = Logger::new(Arc::new(Config::default()), sink.clone());
    (logger, sink)
}

#[test]
fn uncancelled_pre_log_fires_exactly_one_timeout_line() {
    let (logger, sink) = capturing_logger();

    let _pending = logger.pre_log(
        LogEvent::new(Severity::Info, callsite!()).with_message("loading profile"),
    );

    // Well past the deadline, with slack for the watcher thread.
    thread::sleep(DEFER_DELAY + Duration::from_millis(400));

    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 1, "got: {lines:?}");
    assert!(lines[0].ends_with(" [TIMEOUT]"), "got: {}", lines[0]);
    assert!(lines[0].contains("\"loading profile\""));
}

#[test]
fn post_log_after_pre_log_emits_exactly_one_normal_line() {
    let (logger, sink) = capturing_logger();

    let pending = logger.pre_log(
        LogEvent::new(Severity::Info, callsite!()).with_message("loading profile"),
    );
    assert!(!pending.is_cancelled());
    logger.post_log(pending);

    // The immediate line is already captured.
    let lines = sink.drain_lines();
    assert_eq!(lines.len(), 1, "got: {lines:?}");
    assert!(!lines[0].contains("[TIMEOUT]"), "got: {}", lines[0]);

    // The deferred task observes the cancelled flag and emits nothing.
    thread::sleep(DEFER_DELAY + Duration::from_millis(400));
    assert!(sink.drain_lines().is_empty());
}
