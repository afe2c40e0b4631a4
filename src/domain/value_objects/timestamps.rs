use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, de::Error};

/// Parses an RFC 3339 instant, or a bare `YYYY-MM-DD` date read as midnight UTC.
pub fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Some(instant.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

pub fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}

pub fn deserialize_optional_instant<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) => parse_instant(&raw)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}"))),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bare_date_is_midnight_utc() {
        let parsed = parse_instant("2026-01-15").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn rfc3339_offset_is_normalized_to_utc() {
        let parsed = parse_instant("2025-01-28T12:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2025, 1, 28, 10, 30, 0).unwrap());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_instant("next tuesday").is_none());
        assert!(parse_instant("2026-13-01").is_none());
    }
}
