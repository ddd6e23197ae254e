//! crates/logging/src/flags.rs
//! Bit-flag configuration selecting contextual fields for each line.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign};
use std::str::FromStr;

use crate::error::ParseFlagsError;

/// Bitmask of contextual fields a [`LineLogger`](crate::LineLogger) may add.
///
/// The bit layout follows the common logging-library convention. Only the
/// exact combination [`LogFlags::CONTEXT`] (`DATE | TIME | SHORT_FILE`) is
/// honored and produces a timestamp and caller-location prefix. Every other
/// value, including supersets of it, produces plain lines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LogFlags(u32);

const NAMES: [(&str, LogFlags); 7] = [
    ("date", LogFlags::DATE),
    ("time", LogFlags::TIME),
    ("microseconds", LogFlags::MICROSECONDS),
    ("longfile", LogFlags::LONG_FILE),
    ("shortfile", LogFlags::SHORT_FILE),
    ("utc", LogFlags::UTC),
    ("msgprefix", LogFlags::MSG_PREFIX),
];

impl LogFlags {
    /// Calendar date in the local time zone.
    pub const DATE: Self = Self(1);
    /// Time of day in the local time zone.
    pub const TIME: Self = Self(1 << 1);
    /// Microsecond resolution; assumes [`LogFlags::TIME`].
    pub const MICROSECONDS: Self = Self(1 << 2);
    /// Full file path and line number of the caller.
    pub const LONG_FILE: Self = Self(1 << 3);
    /// File basename and line number of the caller; overrides [`LogFlags::LONG_FILE`].
    pub const SHORT_FILE: Self = Self(1 << 4);
    /// Render date and time in UTC.
    pub const UTC: Self = Self(1 << 5);
    /// Move the prefix from the start of the line to just before the message.
    pub const MSG_PREFIX: Self = Self(1 << 6);
    /// Initial values for a standard logger: `DATE | TIME`.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0);
    /// The one combination that enables the context prefix.
    pub const CONTEXT: Self = Self(Self::STD.0 | Self::SHORT_FILE.0);

    /// Returns a mask with no flags set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Wraps a raw bitmask. Unknown bits are kept as-is.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bitmask.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Reports whether every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Reports whether no bits are set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Reports whether lines written under these flags carry the
    /// timestamp and caller-location prefix.
    #[must_use]
    pub const fn emits_context(self) -> bool {
        self.0 == Self::CONTEXT.0
    }
}

impl BitOr for LogFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for LogFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for LogFlags {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl fmt::Display for LogFlags {
    /// Renders the flag names joined by `|`, `0` for an empty mask. Bits
    /// without a name are appended as a hexadecimal remainder.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("0");
        }

        let mut remaining = self.0;
        let mut first = true;
        for (name, flag) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str("|")?;
                }
                f.write_str(name)?;
                remaining &= !flag.0;
                first = false;
            }
        }

        if remaining != 0 {
            if !first {
                f.write_str("|")?;
            }
            write!(f, "{remaining:#x}")?;
        }
        Ok(())
    }
}

impl FromStr for LogFlags {
    type Err = ParseFlagsError;

    /// Parses a raw integer or names separated by `,` or `|`
    /// (for example `date|time|shortfile` or `std,shortfile`).
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseFlagsError::Empty);
        }
        if let Ok(bits) = trimmed.parse::<u32>() {
            return Ok(Self(bits));
        }

        let mut flags = Self::empty();
        let mut named = false;
        for part in trimmed.split([',', '|']) {
            let name = part.trim();
            if name.is_empty() {
                continue;
            }
            flags |= lookup(name).ok_or_else(|| ParseFlagsError::UnknownFlag(name.to_owned()))?;
            named = true;
        }
        if named {
            Ok(flags)
        } else {
            Err(ParseFlagsError::Empty)
        }
    }
}

fn lookup(name: &str) -> Option<LogFlags> {
    if name.eq_ignore_ascii_case("std") {
        return Some(LogFlags::STD);
    }
    NAMES
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|&(_, flag)| flag)
}
