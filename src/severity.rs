// SPDX-License-Identifier: MIT OR Apache-2.0

//! Severity classification for log events.
//!
//! Unlike the five-level ladders of general-purpose logging crates, this
//! crate has exactly three severities, and only [`Severity::Error`] carries
//! data: the error cause being reported. The cause is opaque domain data
//! supplied by the caller and is only ever rendered, never interpreted.

use std::error::Error;

/// The severity of a log event.
///
/// `Error` owns its cause as a boxed [`std::error::Error`] so the formatter
/// can render both a short description (`Display`) and a verbose one
/// (`Debug`) without knowing the concrete type.
#[derive(Debug)]
pub enum Severity {
    Info,
    Warning,
    Error(Box<dyn Error + Send + Sync>),
}

impl Severity {
    /// The fixed display label for this severity.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Error(_) => "Error",
        }
    }

    /// The error cause, if this is an `Error` severity.
    pub fn error(&self) -> Option<&(dyn Error + Send + Sync)> {
        match self {
            Severity::Error(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/*
Boilerplate notes for Severity:

IMPLEMENTED:
- Debug: Derived - Box<dyn Error> is itself Debug

NOT IMPLEMENTED:
- Clone/Copy: the error payload is an unclonable trait object
- PartialEq/Eq/Hash: error causes have no meaningful equality
- Default: the caller always knows the severity; a silent Info default
  invites misclassified events
- Ord: severities are classifications, not an ordering (that's Tier's job)

AUTOMATIC:
- Send/Sync: the payload bounds require Send + Sync, so the enum is both
*/

#[cfg(test)]
mod tests {
    use super::Severity;

    #[test]
    fn labels() {
        assert_eq!(Severity::Info.label(), "Info");
        assert_eq!(Severity::Warning.label(), "Warning");
        let err: Box<dyn std::error::Error + Send + Sync> = "boom".into();
        assert_eq!(Severity::Error(err).label(), "Error");
    }

    #[test]
    fn error_accessor() {
        assert!(Severity::Info.error().is_none());
        assert!(Severity::Warning.error().is_none());
        let err: Box<dyn std::error::Error + Send + Sync> = "boom".into();
        let sev = Severity::Error(err);
        assert_eq!(sev.error().unwrap().to_string(), "boom");
    }

    #[test]
    fn assert_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Severity>();
    }
}
