//! Calendar-date helpers and the serde adapter used for `transactionDate`.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serializer};

const WIRE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date, or the date part of an RFC 3339 timestamp.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let date_part = input.trim().split('T').next()?;
    NaiveDate::parse_from_str(date_part, WIRE_FORMAT).ok()
}

/// The value an `<input type="date">` expects.
pub fn to_input_value(date: NaiveDate) -> String {
    date.format(WIRE_FORMAT).to_string()
}

/// Human readable date, e.g. "January 15, 2025".
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_input_value(*date))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_accepts_plain_and_timestamp() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(parse_date("2024-03-09"), Some(expected));
        assert_eq!(parse_date("2024-03-09T22:00:00.000Z"), Some(expected));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("09/03/2024"), None);
        assert_eq!(parse_date("2024-02-30"), None);
    }

    #[test]
    fn test_format_display_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_display_date(date), "January 5, 2025");
        assert_eq!(to_input_value(date), "2025-01-05");
    }
}
