//! Strict UTC instant parsing.
//!
//! Every instant entering the engine carries an explicit offset. Naive
//! timestamps are rejected instead of being silently read as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::TimeError;

/// Parse an RFC 3339 instant (`2024-03-20T12:00:00Z`, `1970-03-26T19:00:00+09:00`)
/// and convert it to UTC.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, TimeError> {
    let trimmed = s.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(e) => {
            let naive = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
                .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f"));
            if naive.is_ok() {
                Err(TimeError::MissingOffset(trimmed.to_string()))
            } else {
                Err(TimeError::Malformed {
                    input: trimmed.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn zulu() {
        let t = parse_utc("2000-01-01T00:00:00Z").unwrap();
        assert_eq!((t.year(), t.month(), t.day(), t.hour()), (2000, 1, 1, 0));
    }

    #[test]
    fn offset_is_resolved_to_utc() {
        // 19:00 JST is 10:00 UTC.
        let t = parse_utc("1970-03-26T19:00:00+09:00").unwrap();
        assert_eq!((t.day(), t.hour(), t.minute()), (26, 10, 0));
    }

    #[test]
    fn fractional_seconds_kept() {
        let t = parse_utc("2024-03-20T12:00:00.250Z").unwrap();
        assert_eq!(t.nanosecond(), 250_000_000);
    }

    #[test]
    fn naive_is_rejected() {
        let err = parse_utc("2024-03-20T12:00:00").unwrap_err();
        assert!(matches!(err, TimeError::MissingOffset(_)), "got {err:?}");
    }

    #[test]
    fn garbage_is_malformed() {
        let err = parse_utc("yesterday at noon").unwrap_err();
        assert!(matches!(err, TimeError::Malformed { .. }), "got {err:?}");
    }
}
