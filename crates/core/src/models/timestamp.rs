//! Lenient decoding for backend timestamps.
//!
//! The backend serializes `LocalDateTime` either as an ISO string without an
//! offset or, depending on its JSON settings, as a `[y, m, d, h, mi, s, ns]`
//! array. A timestamp that matches neither shape decodes as `None` rather
//! than failing the whole record.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn deserialize_optional<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(parse_value))
}

fn parse_value(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::String(s) => parse_str(s),
        Value::Array(parts) => parse_parts(parts),
        _ => None,
    }
}

fn parse_str(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.naive_utc()))
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn parse_parts(parts: &[Value]) -> Option<NaiveDateTime> {
    let mut numbers = parts.iter().map(Value::as_u64);
    let mut next = || numbers.next().flatten().unwrap_or(0);

    let year = i32::try_from(next()).ok()?;
    let month = u32::try_from(next()).ok()?;
    let day = u32::try_from(next()).ok()?;
    let hour = u32::try_from(next()).ok()?;
    let minute = u32::try_from(next()).ok()?;
    let second = u32::try_from(next()).ok()?;
    let nano = u32::try_from(next()).ok()?;

    NaiveDate::from_ymd_opt(year, month, day)?.and_hms_nano_opt(hour, minute, second, nano)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "deserialize_optional")]
        at: Option<NaiveDateTime>,
    }

    fn probe(value: Value) -> Option<NaiveDateTime> {
        serde_json::from_value::<Probe>(json!({ "at": value })).unwrap().at
    }

    #[test]
    fn test_iso_strings() {
        let expected = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(probe(json!("2024-03-09T14:05:00")), Some(expected));
        assert_eq!(probe(json!("2024-03-09T14:05:00Z")), Some(expected));
        assert!(probe(json!("2024-03-09T14:05:00.123456")).is_some());
    }

    #[test]
    fn test_array_form() {
        let at = probe(json!([2024, 3, 9, 14, 5])).unwrap();
        assert_eq!(at.to_string(), "2024-03-09 14:05:00");
    }

    #[test]
    fn test_unparseable_is_none() {
        assert_eq!(probe(json!("yesterday")), None);
        assert_eq!(probe(json!(12)), None);
        assert_eq!(probe(Value::Null), None);
    }
}
