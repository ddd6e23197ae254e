//! crates/logging/src/call_site.rs
//! Resolution of the source location that invoked a logging entry point.

use std::fmt;
use std::panic::Location;

/// File and line of the code that called a logging entry point.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallSite {
    file: String,
    line: u32,
}

impl CallSite {
    /// Creates a call site from a file path and line number.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Returns the file path as recorded by the compiler.
    #[must_use]
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Returns the final path component of [`file`](Self::file).
    #[must_use]
    pub fn short_file(&self) -> &str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(&self.file)
    }

    /// Returns the line number.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl From<&Location<'_>> for CallSite {
    fn from(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallSite {
    /// Renders the short form `basename:line`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.short_file(), self.line)
    }
}

/// Maps the location captured at a logging entry point to a [`CallSite`].
///
/// Entry points are `#[track_caller]`, so `caller` already names the code that
/// invoked `info`/`debug` (or the macro invocation), not the logger internals.
/// Implementations that cannot or should not report locations return `None`;
/// the context prefix then carries only the timestamp.
pub trait ResolveCallSite {
    /// Resolves the call site for `caller`.
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallSite>;
}

/// Reports the compiler-captured caller location unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct CallerLocation;

impl ResolveCallSite for CallerLocation {
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallSite> {
        Some(CallSite::from(caller))
    }
}

/// Never resolves a location.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoCallSite;

impl ResolveCallSite for NoCallSite {
    fn resolve(&self, _caller: &'static Location<'static>) -> Option<CallSite> {
        None
    }
}

impl<F> ResolveCallSite for F
where
    F: Fn(&'static Location<'static>) -> Option<CallSite>,
{
    fn resolve(&self, caller: &'static Location<'static>) -> Option<CallSite> {
        self(caller)
    }
}
