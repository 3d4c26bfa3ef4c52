// webscrub-core/src/convert.rs
//! Integer parsing and millisecond-epoch time conversions.
//!
//! License: MIT OR Apache-2.0

use chrono::{DateTime, Utc};

use crate::errors::WebscrubError;

/// Parses every string as an `i64`, all-or-nothing: the first failure
/// aborts and names the offending input.
pub fn parse_ints<S: AsRef<str>>(values: &[S]) -> Result<Vec<i64>, WebscrubError> {
    let mut out = Vec::with_capacity(values.len());
    for value in values {
        let s = value.as_ref();
        let parsed = s
            .trim()
            .parse::<i64>()
            .map_err(|_| WebscrubError::ParseInt(s.to_string()))?;
        out.push(parsed);
    }
    Ok(out)
}

/// Current UTC time as milliseconds since the Unix epoch.
pub fn now_utc_ms() -> i64 {
    time_to_ms(Utc::now())
}

/// Converts a timestamp to milliseconds since the Unix epoch.
pub fn time_to_ms(t: DateTime<Utc>) -> i64 {
    t.timestamp_millis()
}

/// Parses a decimal millisecond-epoch string back into a UTC timestamp.
pub fn ms_to_time(ms: &str) -> Result<DateTime<Utc>, WebscrubError> {
    let millis = ms
        .trim()
        .parse::<i64>()
        .map_err(|_| WebscrubError::Timestamp(ms.to_string()))?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| WebscrubError::Timestamp(ms.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_a_list_of_ints() {
        let parsed = parse_ints(&["1", "-2", " 30 "]).expect("parse failed");
        assert_eq!(parsed, vec![1, -2, 30]);
    }

    #[test]
    fn first_bad_value_aborts() {
        let err = parse_ints(&["1", "two", "3"]).unwrap_err();
        assert!(matches!(err, WebscrubError::ParseInt(ref v) if v == "two"));
    }

    #[test]
    fn empty_input_parses_to_empty() {
        let parsed = parse_ints::<&str>(&[]).expect("parse failed");
        assert!(parsed.is_empty());
    }

    #[test]
    fn ms_roundtrip() {
        let t = Utc.with_ymd_and_hms(2024, 5, 17, 12, 30, 45).unwrap();
        let ms = time_to_ms(t);
        let back = ms_to_time(&ms.to_string()).expect("ms_to_time failed");
        assert_eq!(back, t);
    }

    #[test]
    fn invalid_ms_strings_fail() {
        assert!(ms_to_time("not-a-number").is_err());
        assert!(ms_to_time("").is_err());
    }

    #[test]
    fn now_is_after_2020() {
        // sanity bound, not an exact clock test
        let jan_2020_ms = 1_577_836_800_000;
        assert!(now_utc_ms() > jan_2020_ms);
    }
}
