use crate::core::error::{Result, SearchError};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveTime, SecondsFormat, TimeZone};
use serde::Serializer;

/// Parses an ISO-8601 date-time carrying a UTC offset.
///
/// Besides RFC 3339 this accepts a space separator, compact (`+0000`) and
/// second-precision (`+01:30:15`) offsets, and signed years outside
/// 0000-9999 (`+12000-01-01T00:00:00Z`). Strings without an offset are
/// rejected: every record timestamp is timezone-aware.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = value.trim();

    let rfc3339_err = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(parsed) => return Ok(parsed),
        Err(e) => e,
    };

    parse_extended(trimmed).ok_or_else(|| SearchError::Timestamp {
        value: value.to_string(),
        source: rfc3339_err,
    })
}

/// Renders the serialized form read back by [`parse_timestamp`].
///
/// RFC 3339 whenever it can represent the value exactly; otherwise the
/// offset keeps its seconds and the year its sign.
pub fn format_timestamp(timestamp: &DateTime<FixedOffset>) -> String {
    let offset = timestamp.offset().local_minus_utc();
    if offset % 60 == 0 && (0..=9999).contains(&timestamp.year()) {
        return timestamp.to_rfc3339_opts(SecondsFormat::AutoSi, true);
    }

    format!(
        "{}{}",
        timestamp.naive_local().format("%Y-%m-%dT%H:%M:%S%.f"),
        format_offset(offset)
    )
}

fn format_offset(offset: i32) -> String {
    if offset == 0 {
        return "Z".to_string();
    }

    let sign = if offset < 0 { '-' } else { '+' };
    let abs = offset.unsigned_abs();
    let (hours, minutes, seconds) = (abs / 3600, abs % 3600 / 60, abs % 60);

    if seconds == 0 {
        format!("{sign}{hours:02}:{minutes:02}")
    } else {
        format!("{sign}{hours:02}:{minutes:02}:{seconds:02}")
    }
}

fn parse_extended(value: &str) -> Option<DateTime<FixedOffset>> {
    let split = value.find(|c: char| c == 'T' || c == 't' || c == ' ')?;
    let date = parse_date(&value[..split])?;
    let (time, offset) = split_offset(&value[split + 1..])?;
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S%.f").ok()?;

    offset.from_local_datetime(&date.and_time(time)).single()
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

// `YYYY-MM-DD`, optionally signed with more year digits.
fn parse_date(date: &str) -> Option<NaiveDate> {
    let (sign, body) = match date.strip_prefix('-') {
        Some(body) => (-1, body),
        None => (1, date.strip_prefix('+').unwrap_or(date)),
    };

    let mut fields = body.split('-');
    let (year, month, day) = (fields.next()?, fields.next()?, fields.next()?);
    if fields.next().is_some() || year.len() < 4 || month.len() != 2 || day.len() != 2 {
        return None;
    }
    if ![year, month, day].iter().all(|field| is_digits(field)) {
        return None;
    }

    NaiveDate::from_ymd_opt(sign * year.parse::<i32>().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn split_offset(rest: &str) -> Option<(&str, FixedOffset)> {
    if let Some(time) = rest.strip_suffix(|c: char| c == 'Z' || c == 'z') {
        return Some((time, FixedOffset::east_opt(0)?));
    }

    let at = rest.rfind(|c: char| c == '+' || c == '-')?;
    let (time, offset) = rest.split_at(at);
    let sign = if offset.starts_with('-') { -1 } else { 1 };
    let body = &offset[1..];

    let fields: Vec<&str> = if body.contains(':') {
        body.split(':').collect()
    } else {
        match body.len() {
            2 => vec![body],
            4 => vec![&body[..2], &body[2..]],
            6 => vec![&body[..2], &body[2..4], &body[4..]],
            _ => return None,
        }
    };
    if fields.is_empty() || fields.len() > 3 || !fields.iter().all(|f| f.len() == 2 && is_digits(f)) {
        return None;
    }

    let mut seconds = 0;
    for (field, scale) in fields.iter().zip([3600, 60, 1]) {
        seconds += field.parse::<i32>().ok()? * scale;
    }

    Some((time, FixedOffset::east_opt(sign * seconds)?))
}

pub(crate) fn serialize<S>(timestamp: &DateTime<FixedOffset>, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Timelike, Utc};

    #[test]
    fn test_parse_utc_zulu() {
        let parsed = parse_timestamp("2023-05-01T12:00:00Z").unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.offset().local_minus_utc(), 0);
    }

    #[test]
    fn test_parse_keeps_offset() {
        let parsed = parse_timestamp("2023-05-01T14:00:00+02:00").unwrap();
        let expected = Utc.with_ymd_and_hms(2023, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.offset().local_minus_utc(), 2 * 3600);
    }

    #[test]
    fn test_parse_compact_offset_and_space_separator() {
        let expected = Utc.with_ymd_and_hms(2021, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(parse_timestamp("2021-03-04T05:06:07+0000").unwrap(), expected);
        assert_eq!(parse_timestamp("2021-03-04 05:06:07+00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("not-a-date").unwrap_err();
        match err {
            SearchError::Timestamp { value, .. } => assert_eq!(value, "not-a-date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_rejects_missing_offset() {
        assert!(parse_timestamp("2023-05-01T12:00:00").is_err());
    }

    #[test]
    fn test_format_round_trips_subseconds() {
        let parsed = parse_timestamp("2022-11-30T23:59:59.123456Z").unwrap();
        assert_eq!(parsed.nanosecond(), 123_456_000);

        let formatted = format_timestamp(&parsed);
        assert_eq!(formatted, "2022-11-30T23:59:59.123456Z");
        assert_eq!(parse_timestamp(&formatted).unwrap(), parsed);
    }

    #[test]
    fn test_parse_second_precision_offset() {
        let parsed = parse_timestamp("2023-01-01T00:00:00+01:30:15").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 5415);
        assert_eq!(parsed, Utc.with_ymd_and_hms(2022, 12, 31, 22, 29, 45).unwrap());
    }

    #[test]
    fn test_expanded_years() {
        let far = Utc
            .with_ymd_and_hms(12000, 1, 1, 0, 0, 0)
            .unwrap()
            .with_timezone(&FixedOffset::east_opt(0).unwrap());
        assert_eq!(format_timestamp(&far), "+12000-01-01T00:00:00Z");
        assert_eq!(parse_timestamp("+12000-01-01T00:00:00Z").unwrap(), far);

        let bce = parse_timestamp("-0001-03-01T00:00:00+00:00").unwrap();
        assert_eq!(bce.year(), -1);
    }

    #[test]
    fn test_format_parse_agree_over_generated_values() {
        let years = [-9999, -1, 0, 1, 1969, 2023, 9999, 10000, 12000, 99999];
        let offsets = [-86399, -45015, -3600, -59, 0, 1, 5415, 19800, 86399];
        let nanos = [0, 1_000, 500_000_000, 123_456_789];

        for year in years {
            for offset in offsets {
                for nano in nanos {
                    let local = NaiveDate::from_ymd_opt(year, 2, 28)
                        .unwrap()
                        .and_hms_nano_opt(23, 59, 58, nano)
                        .unwrap();
                    let timestamp = FixedOffset::east_opt(offset)
                        .unwrap()
                        .from_local_datetime(&local)
                        .single()
                        .unwrap();

                    let text = format_timestamp(&timestamp);
                    let parsed = parse_timestamp(&text).unwrap_or_else(|e| panic!("{text}: {e}"));

                    assert_eq!(parsed, timestamp, "{text}");
                    assert_eq!(parsed.offset(), timestamp.offset(), "{text}");
                }
            }
        }
    }

    #[test]
    fn test_rejects_malformed_offsets_and_dates() {
        for value in [
            "2023-01-01T00:00:00+1",
            "2023-01-01T00:00:00+01:3",
            "2023-01-01T00:00:00+01:30:15:00",
            "2023-01-01T00:00:00+24:00",
            "23-01-01T00:00:00Z",
            "2023-1-01T00:00:00Z",
            "2023-02-30T00:00:00Z",
        ] {
            assert!(parse_timestamp(value).is_err(), "{value}");
        }
    }
}
