//! Conversions between the compact approach timestamps found in the CAD data
//! and the naive UTC datetimes carried through the rest of the crate.
//!
//! Source timestamps look like `2025-Jan-15 06:00` and stop at minute
//! precision. They are parsed strictly: anything that does not match the
//! full pattern is rejected instead of being truncated.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use regex::Regex;
use std::sync::LazyLock;

/// Compact format used by the close approach data source.
const APPROACH_TIME_FORMAT: &str = "%Y-%b-%d %H:%M";

/// Format used by the table writer and the human-readable views.
const OUTPUT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format used by the nested-record writer.
const ISO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static APPROACH_TIME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{4}-[A-Z][a-z]{2}-\d{2} \d{2}:\d{2}$").expect("Invalid regex pattern")
});

/// Parses a compact approach time such as `2025-Jan-15 06:00`.
///
/// # Errors
/// Returns [`Error::Format`] when the string does not match the pattern or
/// names an impossible date.
pub fn parse_approach_time(raw: &str) -> Result<NaiveDateTime> {
    if !APPROACH_TIME_RE.is_match(raw) {
        return Err(Error::Format(format!(
            "approach time '{}' does not match 'YYYY-Mon-DD HH:MM'",
            raw
        )));
    }

    NaiveDateTime::parse_from_str(raw, APPROACH_TIME_FORMAT)
        .map_err(|e| Error::Format(format!("invalid approach time '{}': {}", raw, e)))
}

/// Renders a timestamp back into the compact source format.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(APPROACH_TIME_FORMAT).to_string()
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM`.
pub fn datetime_to_str(ts: &NaiveDateTime) -> String {
    ts.format(OUTPUT_TIME_FORMAT).to_string()
}

/// Renders a timestamp as an ISO-8601 string with seconds, e.g. `1900-01-01T00:00:00`.
pub fn datetime_to_iso(ts: &NaiveDateTime) -> String {
    ts.format(ISO_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_parse_compact_time() {
        let ts = parse_approach_time("2025-Jan-15 06:00").unwrap();
        let expected = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(6, 0, 0)
            .unwrap();
        assert_eq!(ts, expected);
        assert_eq!(ts.second(), 0);
    }

    #[test]
    fn test_format_round_trip() {
        for raw in ["2025-Jan-15 06:00", "1900-Dec-31 23:59", "2020-Feb-29 12:07"] {
            let ts = parse_approach_time(raw).unwrap();
            assert_eq!(format_timestamp(&ts), raw);
            assert_eq!(parse_approach_time(&format_timestamp(&ts)).unwrap(), ts);
        }
    }

    #[test]
    fn test_rejects_malformed_times() {
        for raw in [
            "",
            "2025-01-15 06:00",
            "2025-Jan-15",
            "2025-Jan-15 06:00:30",
            "2025-January-15 06:00",
            " 2025-Jan-15 06:00",
            "2025-Jan-32 06:00",
            "2021-Feb-29 00:00",
            "2025-Foo-15 06:00",
        ] {
            assert!(
                matches!(parse_approach_time(raw), Err(Error::Format(_))),
                "expected format error for {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_output_renderings() {
        let ts = parse_approach_time("1900-Jan-01 00:00").unwrap();
        assert_eq!(datetime_to_str(&ts), "1900-01-01 00:00");
        assert_eq!(datetime_to_iso(&ts), "1900-01-01T00:00:00");
    }
}
