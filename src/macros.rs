// SPDX-License-Identifier: MIT OR Apache-2.0

//! Call-site capture and argument-list conveniences.

/// Captures the current call site as a [`CallSite`](crate::CallSite).
///
/// The file comes from [`file!`]; the function name is recovered from
/// [`std::any::type_name`] on a nested item, so it includes the module
/// path (`myapp::fetcher::fetch`).
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __here() {}
        fn __name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = __name_of(__here);
        let name = name.strip_suffix("::__here").unwrap_or(name);
        $crate::CallSite::new(file!(), name)
    }};
}

/// Builds an [`Args`](crate::Args) list in insertion order.
///
/// A bare `nil` on the right-hand side stands for an absent value:
///
/// ```rust
/// use loglater::args;
///
/// let args = args! {
///     "a" => "x",
///     "b" => nil,
///     "attempt" => 3u32,
/// };
/// assert!(!args.is_empty());
/// ```
#[macro_export]
macro_rules! args {
    () => { $crate::Args::new() };
    ($($rest:tt)+) => {{
        let mut args = $crate::Args::new();
        $crate::__args_insert!(args; $($rest)+);
        args
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __args_insert {
    ($args:ident;) => {};
    ($args:ident; $key:expr => nil $(, $($rest:tt)*)?) => {
        $args.insert($key, $crate::ArgValue::Nil);
        $crate::__args_insert!($args; $($($rest)*)?);
    };
    ($args:ident; $key:expr => $value:expr $(, $($rest:tt)*)?) => {
        $args.insert($key, $value);
        $crate::__args_insert!($args; $($($rest)*)?);
    };
}

/// Logs immediately through the global logger, capturing the call site.
///
/// ```rust
/// use loglater::{Severity, log};
///
/// log!(Severity::Info);
/// log!(Severity::Warning, "cache miss");
/// ```
#[macro_export]
macro_rules! log {
    ($severity:expr $(,)?) => {
        $crate::log($crate::LogEvent::new($severity, $crate::callsite!()))
    };
    ($severity:expr, $message:expr $(,)?) => {
        $crate::log(
            $crate::LogEvent::new($severity, $crate::callsite!()).with_message($message),
        )
    };
}

/// Schedules a deferred emission through the global logger, capturing the
/// call site. Returns the [`DeferredLog`](crate::DeferredLog) handle to
/// pass to [`post_log`](crate::post_log).
#[macro_export]
macro_rules! pre_log {
    ($severity:expr $(,)?) => {
        $crate::pre_log($crate::LogEvent::new($severity, $crate::callsite!()))
    };
    ($severity:expr, $message:expr $(,)?) => {
        $crate::pre_log(
            $crate::LogEvent::new($severity, $crate::callsite!()).with_message($message),
        )
    };
}
