//
//  clumio-sdk
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Display helpers for the `clumio` binary. Clumio timestamps are RFC 3339 strings such as
//! `2024-03-01T12:00:00Z`; the helpers here fall back to the input when a value does not parse.
//!
//! ```rust
//! use clumio_sdk::util::{format_timestamp, truncate};
//!
//! assert_eq!(format_timestamp("not a date"), "not a date");
//! assert_eq!(truncate("organizational-unit", 10), "organiz...");
//! ```

use std::time::Duration;

use chrono::{DateTime, Local, Utc};

/// Formats an RFC 3339 timestamp as local `YYYY-MM-DD HH:MM`.
pub fn format_timestamp(ts: &str) -> String {
    DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|_| ts.to_string())
}

/// Formats an RFC 3339 timestamp relative to now, e.g. `3 hours ago`.
pub fn format_relative_time(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => relative_to(dt.with_timezone(&Utc), Utc::now()),
        Err(_) => ts.to_string(),
    }
}

fn relative_to(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then).num_seconds();

    if diff < 0 {
        return "in the future".to_string();
    }

    let diff = diff as u64;
    let (value, unit) = if diff < 60 {
        return "just now".to_string();
    } else if diff < 3600 {
        (diff / 60, "minute")
    } else if diff < 86400 {
        (diff / 3600, "hour")
    } else if diff < 604800 {
        (diff / 86400, "day")
    } else if diff < 2592000 {
        (diff / 604800, "week")
    } else if diff < 31536000 {
        (diff / 2592000, "month")
    } else {
        (diff / 31536000, "year")
    };

    format!("{} {}{} ago", value, unit, if value == 1 { "" } else { "s" })
}

/// Formats a duration as its two largest units, e.g. `1h 5m`.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else if secs < 86400 {
        format!("{}h {}m", secs / 3600, (secs % 3600) / 60)
    } else {
        format!("{}d {}h", secs / 86400, (secs % 86400) / 3600)
    }
}

/// Elapsed time between two RFC 3339 timestamps, `None` if either fails to parse or `end`
/// precedes `start`.
pub fn elapsed(start: &str, end: &str) -> Option<String> {
    let start = DateTime::parse_from_rfc3339(start).ok()?;
    let end = DateTime::parse_from_rfc3339(end).ok()?;
    let duration = end.signed_duration_since(start).to_std().ok()?;
    Some(format_duration(duration))
}

/// Shortens `s` to at most `max_len` characters, ending in `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
        assert_eq!(truncate("abcdef", 2), "ab");
    }

    #[test]
    fn test_relative_to() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap();
        let at = |h, m| Utc.with_ymd_and_hms(2024, 3, 10, h, m, 0).unwrap();

        assert_eq!(relative_to(at(12, 0), now), "just now");
        assert_eq!(relative_to(at(11, 59), now), "1 minute ago");
        assert_eq!(relative_to(at(9, 0), now), "3 hours ago");
        assert_eq!(
            relative_to(Utc.with_ymd_and_hms(2024, 3, 8, 12, 0, 0).unwrap(), now),
            "2 days ago"
        );
        assert_eq!(
            relative_to(Utc.with_ymd_and_hms(2024, 3, 11, 0, 0, 0).unwrap(), now),
            "in the future"
        );
    }

    #[test]
    fn test_unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_relative_time("yesterday"), "yesterday");
    }

    #[test]
    fn test_elapsed() {
        assert_eq!(
            elapsed("2024-03-10T12:00:00Z", "2024-03-10T13:05:00Z").as_deref(),
            Some("1h 5m")
        );
        assert_eq!(elapsed("2024-03-10T12:00:00Z", "2024-03-10T11:00:00Z"), None);
        assert_eq!(elapsed("bad", "2024-03-10T11:00:00Z"), None);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(90000)), "1d 1h");
    }
}
