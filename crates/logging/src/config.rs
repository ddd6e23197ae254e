//! crates/logging/src/config.rs
//! Logger configuration combining prefix, flags, and level.

use std::io::Write;

use crate::error::{ParseFlagsError, ParseLevelError};
use crate::flags::LogFlags;
use crate::level::Level;
use crate::logger::LineLogger;

/// Settings used to construct a [`LineLogger`].
///
/// # Examples
///
/// ```
/// use logging::{Level, LogFlags, LoggerConfig};
///
/// let mut config = LoggerConfig::default().with_prefix("svc ");
/// config.apply_flags_token("date|time|shortfile").unwrap();
/// config.apply_level_token("info").unwrap();
///
/// let logger = config.build(Vec::<u8>::new());
/// assert_eq!(logger.flags(), LogFlags::CONTEXT);
/// assert_eq!(logger.level(), Level::INFO);
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct LoggerConfig {
    /// Prefix retained by the logger.
    pub prefix: String,
    /// Contextual field flags.
    pub flags: LogFlags,
    /// Initial level threshold.
    pub level: Level,
}

impl LoggerConfig {
    /// Creates a configuration with an empty prefix, no flags, and the default level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: LogFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the initial level.
    #[must_use]
    pub const fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Replaces the level with one parsed from `token` (e.g. `"debug"`, `"200"`).
    pub fn apply_level_token(&mut self, token: &str) -> Result<(), ParseLevelError> {
        self.level = token.parse()?;
        Ok(())
    }

    /// Replaces the flags with ones parsed from `token` (e.g. `"std,shortfile"`).
    pub fn apply_flags_token(&mut self, token: &str) -> Result<(), ParseFlagsError> {
        self.flags = token.parse()?;
        Ok(())
    }

    /// Builds a logger writing to `sink` with this configuration.
    #[must_use]
    pub fn build<W>(self, sink: W) -> LineLogger<W>
    where
        W: Write,
    {
        let logger = LineLogger::new(sink, self.prefix, self.flags);
        logger.set_level(self.level);
        logger
    }
}
