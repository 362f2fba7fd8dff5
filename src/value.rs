// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument values and the ordered argument map.
//!
//! Log events carry an ordered mapping of string keys to untyped values.
//! In the display line each pair renders as `key: value`, where a textual
//! value is quoted, an absent value renders as the literal `nil` token, and
//! anything else renders as a best-effort description captured at call time.
//!
//! That three-way rule is modeled as the [`ArgValue`] sum type rather than
//! dynamic typing: the description of a non-textual value is rendered into
//! a `String` when the value enters the map, which keeps [`Args`] immutable,
//! `Send`, and free of trait objects.

use indexmap::IndexMap;
use std::fmt::{Debug, Display};

/// A single argument value attached to a log event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgValue {
    /// No value; renders as the literal token `nil`.
    Nil,
    /// A textual value; renders quoted.
    Text(String),
    /// Any other value, already rendered to a display string.
    Described(String),
}

impl ArgValue {
    /// Captures an arbitrary `Debug` value as a [`ArgValue::Described`].
    ///
    /// This is the escape hatch for types without a `From` conversion.
    pub fn debug<T: Debug>(value: T) -> ArgValue {
        ArgValue::Described(format!("{:?}", value))
    }
}

impl Display for ArgValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgValue::Nil => write!(f, "nil"),
            ArgValue::Text(s) => write!(f, "{:?}", s),
            ArgValue::Described(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Text(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Text(value)
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        ArgValue::Described(value.to_string())
    }
}

macro_rules! arg_value_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ArgValue {
                fn from(value: $t) -> Self {
                    ArgValue::Described(value.to_string())
                }
            }
        )*
    };
}
arg_value_from_number!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/// `None` becomes [`ArgValue::Nil`].
impl<T: Into<ArgValue>> From<Option<T>> for ArgValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => ArgValue::Nil,
        }
    }
}

/// An insertion-ordered mapping of argument keys to values.
///
/// Pairs render in the order they were inserted. Re-inserting a key
/// replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args(IndexMap<String, ArgValue>);

impl Args {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ArgValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArgValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

#[cfg(test)]
mod tests {
    use super::{ArgValue, Args};

    #[test]
    fn text_renders_quoted() {
        assert_eq!(ArgValue::from("x").to_string(), "\"x\"");
    }

    #[test]
    fn nil_renders_literal() {
        assert_eq!(ArgValue::Nil.to_string(), "nil");
        let absent: Option<&str> = None;
        assert_eq!(ArgValue::from(absent).to_string(), "nil");
    }

    #[test]
    fn numbers_render_unquoted() {
        assert_eq!(ArgValue::from(42u64).to_string(), "42");
        assert_eq!(ArgValue::from(1.5f64).to_string(), "1.5");
    }

    #[test]
    fn debug_escape_hatch() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct S(i32);
        assert_eq!(ArgValue::debug(S(23)).to_string(), "S(23)");
    }

    #[test]
    fn args_preserve_insertion_order() {
        let mut args = Args::new();
        args.insert("b", "2");
        args.insert("a", "1");
        let keys: Vec<&str> = args.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let mut args = Args::new();
        args.insert("a", "1");
        args.insert("b", "2");
        args.insert("a", "3");
        let pairs: Vec<(&str, String)> = args.iter().map(|(k, v)| (k, v.to_string())).collect();
        assert_eq!(pairs, [("a", "\"3\"".to_string()), ("b", "\"2\"".to_string())]);
    }
}
