//! crates/logging/src/error.rs
//! Error types returned by the logger facade and configuration parsers.

use thiserror::Error;

/// Errors surfaced by the process-wide logger facade.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LogError {
    /// A logging call was made before `logging::global::init`.
    #[error("line logger used before logging::global::init was called")]
    Uninitialized,
}

/// Error returned when a level token is neither a known name nor an integer.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown log level: \"{token}\"")]
pub struct ParseLevelError {
    token: String,
}

impl ParseLevelError {
    pub(crate) fn new(token: &str) -> Self {
        Self {
            token: token.to_owned(),
        }
    }

    /// Returns the token that failed to parse.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Errors produced while parsing a [`LogFlags`](crate::LogFlags) list.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseFlagsError {
    /// The input contained no flag names.
    #[error("empty log flag list")]
    Empty,
    /// A component did not name a known flag.
    #[error("unknown log flag: \"{0}\"")]
    UnknownFlag(String),
}
