//! crates/logging/src/context.rs
//! Timestamp and caller-location prefix for the `DATE | TIME | SHORT_FILE` flag set.

use std::fmt::Write as _;

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::macros::format_description;

use crate::call_site::CallSite;

/// RFC 3339 with whole seconds and a numeric offset: `2024-01-02T15:04:05+07:00`.
const OFFSET_TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
);

/// Same layout with the `Z` designator used for a zero offset.
const UTC_TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]Z");

/// Returns the current wall-clock time in the local zone.
///
/// Falls back to UTC when the local offset cannot be determined, which is the
/// case on some platforms once the process has spawned threads.
pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Formats `at` as an RFC 3339 timestamp without fractional seconds.
pub fn format_timestamp(at: OffsetDateTime) -> String {
    let format = if at.offset().is_utc() {
        UTC_TIMESTAMP_FORMAT
    } else {
        OFFSET_TIMESTAMP_FORMAT
    };
    at.format(format)
        .unwrap_or_else(|_| "1970-01-01T00:00:00Z".to_owned())
}

/// Appends `<timestamp> <basename>:<line>: ` to `line`.
///
/// An unresolved call site leaves the location empty, yielding
/// `<timestamp> : `.
pub fn push_context(line: &mut String, at: OffsetDateTime, site: Option<&CallSite>) {
    line.push_str(&format_timestamp(at));
    line.push(' ');
    if let Some(site) = site {
        let _ = write!(line, "{site}");
    }
    line.push_str(": ");
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn utc_timestamps_use_z_designator() {
        let at = datetime!(2024-01-02 15:04:05.123456 UTC);
        assert_eq!(format_timestamp(at), "2024-01-02T15:04:05Z");
    }

    #[test]
    fn offset_timestamps_render_sign_and_minutes() {
        let at = datetime!(2024-01-02 15:04:05 +07:00);
        assert_eq!(format_timestamp(at), "2024-01-02T15:04:05+07:00");

        let at = datetime!(2024-01-02 15:04:05 -03:30);
        assert_eq!(format_timestamp(at), "2024-01-02T15:04:05-03:30");
    }

    #[test]
    fn context_includes_short_location() {
        let mut line = String::new();
        let site = CallSite::new("src/bin/server.rs", 88);
        push_context(&mut line, datetime!(2024-01-02 15:04:05 UTC), Some(&site));
        assert_eq!(line, "2024-01-02T15:04:05Z server.rs:88: ");
    }

    #[test]
    fn missing_location_keeps_timestamp() {
        let mut line = String::new();
        push_context(&mut line, datetime!(2024-01-02 15:04:05 UTC), None);
        assert_eq!(line, "2024-01-02T15:04:05Z : ");
    }
}
