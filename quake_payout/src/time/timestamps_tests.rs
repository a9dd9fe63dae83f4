#[cfg(test)]
mod tests {
    use crate::error::PayoutError;
    use crate::time::{cutoff_instant, historical_cutoff, parse_event_time};
    use chrono::{Datelike, NaiveDate, TimeZone, Timelike, Utc};

    #[test]
    fn test_parse_rfc3339_with_millis() {
        let t = parse_event_time("2021-09-28T04:48:08.650Z").unwrap();
        assert_eq!(t.year(), 2021);
        assert_eq!(t.month(), 9);
        assert_eq!(t.hour(), 4);
        assert_eq!(t.timestamp_subsec_millis(), 650);
    }

    #[test]
    fn test_parse_rfc3339_with_offset_converts_to_utc() {
        // 00:30 at +02:00 is still the previous year in UTC.
        let t = parse_event_time("2021-01-01T00:30:00+02:00").unwrap();
        assert_eq!(t.year(), 2020);
        assert_eq!(t, Utc.with_ymd_and_hms(2020, 12, 31, 22, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_naive_datetime() {
        let t = parse_event_time("1999-08-17 00:01:39").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(1999, 8, 17, 0, 1, 39).unwrap());
    }

    #[test]
    fn test_parse_bare_date() {
        let t = parse_event_time(" 1906-04-18 ").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(1906, 4, 18, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        let err = parse_event_time("last tuesday").unwrap_err();
        assert!(matches!(err, PayoutError::InvalidTimestamp(ref s) if s == "last tuesday"));
    }

    #[test]
    fn test_historical_cutoff() {
        let cutoff = historical_cutoff();
        assert_eq!(cutoff, NaiveDate::from_ymd_opt(2021, 10, 21).unwrap());
        assert_eq!(
            cutoff_instant(cutoff),
            Utc.with_ymd_and_hms(2021, 10, 21, 0, 0, 0).unwrap()
        );
    }
}
