//! crates/logging/src/macros.rs
//! Convenience macros writing through the process-wide logger.
//!
//! The macros forward to [`crate::global`], so the location reported in the
//! context prefix is the macro invocation site. They panic when the global
//! logger has not been initialized.

/// Writes an `[INFO] ` line with the operands separated by spaces.
///
/// # Example
/// ```ignore
/// logging::info!("listening on", addr);
/// ```
#[macro_export]
macro_rules! info {
    () => {
        $crate::global::info(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::global::info(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes an `[INFO] ` line rendered from a format string. No newline is appended.
///
/// # Example
/// ```ignore
/// logging::infof!("accepted {} connections\n", count);
/// ```
#[macro_export]
macro_rules! infof {
    ($($arg:tt)+) => {
        $crate::global::infof(::std::format_args!($($arg)+))
    };
}

/// Writes a `[DEBUG] ` line unless the level is [`Level::INFO`](crate::Level::INFO).
///
/// # Example
/// ```ignore
/// logging::debug!("cache miss", key);
/// ```
#[macro_export]
macro_rules! debug {
    () => {
        $crate::global::debug(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::global::debug(&[$(&$value as &dyn ::std::fmt::Display),+])
    };
}

/// Writes a `[DEBUG] ` line rendered from a format string unless the level is
/// [`Level::INFO`](crate::Level::INFO). No newline is appended.
///
/// # Example
/// ```ignore
/// logging::debugf!("retry {} of {}\n", attempt, limit);
/// ```
#[macro_export]
macro_rules! debugf {
    ($($arg:tt)+) => {
        $crate::global::debugf(::std::format_args!($($arg)+))
    };
}
