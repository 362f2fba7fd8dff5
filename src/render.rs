// SPDX-License-Identifier: MIT OR Apache-2.0

//! The formatter: one event in, one display line out.
//!
//! Field order is fixed: prefix, severity label, source file, function,
//! quoted message, argument segment, error detail, `[TIMEOUT]` marker.
//! Rendering never fails; absent pieces are simply skipped and absent
//! argument values render as the `nil` token.

use crate::event::LogEvent;
use crate::record::LogRecord;

pub(crate) fn render(event: &LogEvent, prefix: &str, timed_out: bool) -> LogRecord {
    let mut record = LogRecord::new();

    record.push_owned(format!("{} ", prefix));
    record.push(event.severity().label());
    record.push(" ");
    record.push(event.callsite().file());
    record.push(" ");
    record.push(event.callsite().function());

    if let Some(message) = event.message() {
        record.push_owned(format!(" \"{}\"", message));
    }

    if !event.args().is_empty() {
        record.push(" [ ");
        let mut first = true;
        for (key, value) in event.args().iter() {
            if !first {
                record.push(", ");
            }
            first = false;
            record.push_owned(format!("{}: {}", key, value));
        }
        record.push(" ]");
    }

    // "cause" rather than "Error" so the severity label stays unique in
    // the line.
    if let Some(error) = event.severity().error() {
        record.push_owned(format!(" cause: {} ({:?})", error, error));
    }

    if timed_out {
        record.push(" [TIMEOUT]");
    }

    record
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::event::{CallSite, LogEvent};
    use crate::severity::Severity;

    const SITE: CallSite = CallSite::new("App/Fetcher.rs", "fetch");

    fn line(event: &LogEvent, timed_out: bool) -> String {
        render(event, "Log", timed_out).to_string()
    }

    #[test]
    fn field_order() {
        let event = LogEvent::new(Severity::Info, SITE).with_message("starting");
        assert_eq!(line(&event, false), "Log Info App/Fetcher.rs fetch \"starting\"");
    }

    #[test]
    fn severity_label_appears_exactly_once() {
        for severity in [
            Severity::Info,
            Severity::Warning,
            Severity::Error("boom".into()),
        ] {
            let label = severity.label();
            let event = LogEvent::new(severity, SITE);
            let rendered = line(&event, false);
            assert_eq!(rendered.matches(label).count(), 1, "in: {rendered}");
        }
    }

    #[test]
    fn message_is_optional() {
        let event = LogEvent::new(Severity::Info, SITE);
        assert_eq!(line(&event, false), "Log Info App/Fetcher.rs fetch");
    }

    #[test]
    fn argument_segment() {
        let absent: Option<&str> = None;
        let event = LogEvent::new(Severity::Info, SITE)
            .with_arg("a", "x")
            .with_arg("b", absent);
        assert_eq!(
            line(&event, false),
            "Log Info App/Fetcher.rs fetch [ a: \"x\", b: nil ]"
        );
    }

    #[test]
    fn error_detail_has_short_and_debug_descriptions() {
        #[derive(Debug)]
        struct Broken;
        impl std::fmt::Display for Broken {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "it broke")
            }
        }
        impl std::error::Error for Broken {}

        let event = LogEvent::new(Severity::Error(Box::new(Broken)), SITE);
        let rendered = line(&event, false);
        assert!(rendered.contains("cause: it broke"), "in: {rendered}");
        assert!(rendered.contains("(Broken)"), "in: {rendered}");
    }

    #[test]
    fn timeout_marker_is_trailing() {
        let event = LogEvent::new(Severity::Warning, SITE).with_message("slow op");
        let rendered = line(&event, true);
        assert!(rendered.ends_with(" [TIMEOUT]"), "in: {rendered}");
        assert!(!line(&event, false).contains("[TIMEOUT]"));
    }

    #[test]
    fn prefix_is_caller_supplied() {
        let event = LogEvent::new(Severity::Info, SITE);
        let rendered = render(&event, "MyApp", false).to_string();
        assert!(rendered.starts_with("MyApp "), "in: {rendered}");
    }
}
