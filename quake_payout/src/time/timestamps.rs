use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::{PayoutError, PayoutResult};

/// Last catalog date (year, month, day) the pricing model takes into account.
pub const HISTORICAL_CUTOFF: (i32, u32, u32) = (2021, 10, 21);

/// Layouts accepted for timestamps without an offset; they are read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a catalog timestamp into a UTC instant.
///
/// Accepts RFC 3339 (`2021-10-12T09:24:05.099Z`), naive date-times and bare
/// `YYYY-MM-DD` dates. Naive values are taken as UTC.
///
/// # Example
/// ```
/// use chrono::Datelike;
/// use quake_payout::time::parse_event_time;
///
/// let t = parse_event_time("2021-10-12T09:24:05.099Z").unwrap();
/// assert_eq!(t.year(), 2021);
/// ```
pub fn parse_event_time(raw: &str) -> PayoutResult<DateTime<Utc>> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(cutoff_instant(date));
    }

    Err(PayoutError::InvalidTimestamp(raw.to_string()))
}

/// Midnight UTC at the start of `date`.
pub fn cutoff_instant(date: NaiveDate) -> DateTime<Utc> {
    Utc.from_utc_datetime(&date.and_time(NaiveTime::default()))
}

/// The [`HISTORICAL_CUTOFF`] date.
pub fn historical_cutoff() -> NaiveDate {
    let (year, month, day) = HISTORICAL_CUTOFF;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
