//! crates/logging/src/level.rs
//! Severity levels and the Debug filtering predicate.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseLevelError;

/// Stored severity threshold of a [`LineLogger`](crate::LineLogger).
///
/// Only [`Level::INFO`] and [`Level::DEBUG`] carry meaning, but any integer is
/// representable: the setter never validates. Filtering is a two-outcome
/// classifier, not an ordering. Debug output is suppressed only when the
/// stored level is exactly [`Level::INFO`].
///
/// # Examples
///
/// ```
/// use logging::Level;
///
/// assert!(!Level::INFO.allows_debug());
/// assert!(Level::DEBUG.allows_debug());
/// assert!(Level::default().allows_debug());
/// assert!(Level::from_raw(7).allows_debug());
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Level(i32);

impl Level {
    /// Info-only output; Debug calls are dropped.
    pub const INFO: Self = Self(200);
    /// Debug output enabled.
    pub const DEBUG: Self = Self(201);

    /// Wraps an arbitrary raw level value.
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    /// Returns the raw level value.
    #[must_use]
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// Reports whether Debug output passes the filter at this level.
    #[must_use]
    pub const fn allows_debug(self) -> bool {
        self.0 != Self::INFO.0
    }
}

impl From<i32> for Level {
    fn from(raw: i32) -> Self {
        Self(raw)
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::INFO => f.write_str("info"),
            Self::DEBUG => f.write_str("debug"),
            Self(raw) => write!(f, "{raw}"),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses `info`, `debug` (any case) or a raw integer.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let trimmed = token.trim();
        if trimmed.eq_ignore_ascii_case("info") {
            return Ok(Self::INFO);
        }
        if trimmed.eq_ignore_ascii_case("debug") {
            return Ok(Self::DEBUG);
        }
        trimmed
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ParseLevelError::new(trimmed))
    }
}

/// Tag written at the start of every line emitted at a severity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tag {
    Info,
    Debug,
}

impl Tag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "[INFO] ",
            Self::Debug => "[DEBUG] ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_wire_values() {
        assert_eq!(Level::INFO.as_raw(), 200);
        assert_eq!(Level::DEBUG.as_raw(), 201);
        assert_eq!(Level::default().as_raw(), 0);
    }

    #[test]
    fn only_info_blocks_debug() {
        assert!(!Level::INFO.allows_debug());
        for raw in [i32::MIN, -1, 0, 1, 199, 201, 202, i32::MAX] {
            assert!(Level::from_raw(raw).allows_debug(), "raw level {raw}");
        }
    }

    #[test]
    fn parse_names_and_numbers() {
        assert_eq!("info".parse::<Level>(), Ok(Level::INFO));
        assert_eq!("DEBUG".parse::<Level>(), Ok(Level::DEBUG));
        assert_eq!(" 200 ".parse::<Level>(), Ok(Level::INFO));
        assert_eq!("-3".parse::<Level>(), Ok(Level::from_raw(-3)));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "verbose".parse::<Level>().expect_err("unknown level");
        assert_eq!(err.token(), "verbose");
    }

    #[test]
    fn parse_error_reports_trimmed_token() {
        let err = "  loud \n".parse::<Level>().expect_err("unknown level");
        assert_eq!(err.token(), "loud");
        assert_eq!(err.to_string(), "unknown log level: \"loud\"");
    }

    #[test]
    fn display_uses_names_for_known_levels() {
        assert_eq!(Level::INFO.to_string(), "info");
        assert_eq!(Level::DEBUG.to_string(), "debug");
        assert_eq!(Level::from_raw(5).to_string(), "5");
    }

    #[test]
    fn tags_carry_trailing_space() {
        assert_eq!(Tag::Info.as_str(), "[INFO] ");
        assert_eq!(Tag::Debug.as_str(), "[DEBUG] ");
    }
}
