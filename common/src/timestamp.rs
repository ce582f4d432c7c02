//! Modification timestamps as the document API sends them.
//!
//! The backend sends seconds since the epoch, usually as a float, sometimes as
//! a numeric string. Values that already look like milliseconds are accepted
//! too.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Values below this are seconds, at or above it milliseconds.
pub const MILLISECOND_THRESHOLD: f64 = 1e12;

/// Rendered when a timestamp is missing or cannot be interpreted.
pub const MISSING_TIMESTAMP: &str = "—";

pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTimestamp {
    Number(f64),
    Text(String),
}

impl RawTimestamp {
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }

    pub fn to_millis(&self) -> Option<i64> {
        let value = self.as_f64()?;
        let millis = if value < MILLISECOND_THRESHOLD { value * 1000.0 } else { value };
        if millis.abs() > i64::MAX as f64 {
            return None;
        }
        Some(millis.round() as i64)
    }

    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.to_millis()?)
    }
}

impl From<f64> for RawTimestamp {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawTimestamp {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Formats `raw` in the given time zone, or a dash when it is unusable.
pub fn format_timestamp_in<Tz: TimeZone>(raw: Option<&RawTimestamp>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match raw.and_then(RawTimestamp::to_datetime) {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => MISSING_TIMESTAMP.to_string(),
    }
}

/// Formats in the viewer's local time zone.
pub fn format_timestamp_local(raw: Option<&RawTimestamp>) -> String {
    format_timestamp_in(raw, &chrono::Local)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_and_millis_are_the_same_instant() {
        let seconds = RawTimestamp::Number(1_700_000_000.0);
        let millis = RawTimestamp::Number(1_700_000_000_000.0);
        assert_eq!(seconds.to_millis(), Some(1_700_000_000_000));
        assert_eq!(seconds.to_datetime(), millis.to_datetime());
        assert_eq!(
            format_timestamp_in(Some(&seconds), &Utc),
            format_timestamp_in(Some(&millis), &Utc)
        );
    }

    #[test]
    fn formats_in_utc() {
        let raw = RawTimestamp::Number(1_700_000_000.0);
        assert_eq!(format_timestamp_in(Some(&raw), &Utc), "2023-11-14 22:13:20");
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let raw = RawTimestamp::Number(1_700_000_000.25);
        assert_eq!(raw.to_millis(), Some(1_700_000_000_250));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let raw = RawTimestamp::from(" 1700000000 ");
        assert_eq!(raw.to_millis(), Some(1_700_000_000_000));
    }

    #[test]
    fn unusable_values_render_a_dash() {
        assert_eq!(format_timestamp_in(None, &Utc), MISSING_TIMESTAMP);
        assert_eq!(format_timestamp_in(Some(&RawTimestamp::from("ayer")), &Utc), MISSING_TIMESTAMP);
        assert_eq!(format_timestamp_in(Some(&RawTimestamp::Number(f64::NAN)), &Utc), MISSING_TIMESTAMP);
        assert_eq!(format_timestamp_in(Some(&RawTimestamp::Number(1e300)), &Utc), MISSING_TIMESTAMP);
    }

    #[test]
    fn deserializes_number_or_string() {
        let n: RawTimestamp = serde_json::from_str("1700000000.5").unwrap();
        assert_eq!(n, RawTimestamp::Number(1_700_000_000.5));
        let s: RawTimestamp = serde_json::from_str("\"1700000000\"").unwrap();
        assert_eq!(s, RawTimestamp::Text("1700000000".into()));
    }
}
