//! Calendar day handling for day logs.
//!
//! A day travels through URLs and the `day` column as eight digits,
//! `DDMMYYYY`. Times of day are entered and shown in a fixed display offset
//! and stored in UTC.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use std::fmt;

/// chrono format of the `DDMMYYYY` day key
pub const DAY_KEY_FORMAT: &str = "%d%m%Y";
/// chrono format of a submitted time of day
pub const TIME_INPUT_FORMAT: &str = "%H:%M";
/// chrono format of a row's time label, e.g. `09:05 pm`
pub const TIME_LABEL_FORMAT: &str = "%I:%M %P";
/// chrono format of the page heading date, e.g. `1 Jan 2024`
pub const TITLE_DATE_FORMAT: &str = "%-d %b %Y";

/// A calendar day a log belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LogDate(NaiveDate);

impl LogDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Parse a `DDMMYYYY` key. Anything other than eight ASCII digits forming
    /// a real date is rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        NaiveDate::parse_from_str(raw, DAY_KEY_FORMAT).ok().map(Self)
    }

    /// Today as seen from the given offset
    pub fn today(offset: &FixedOffset) -> Self {
        Self(Utc::now().with_timezone(offset).date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The `DDMMYYYY` key used in URLs and storage
    pub fn key(&self) -> String {
        self.0.format(DAY_KEY_FORMAT).to_string()
    }

    pub fn title(&self) -> String {
        self.0.format(TITLE_DATE_FORMAT).to_string()
    }

    /// Combine this day with a submitted `HH:MM` in the display offset and
    /// convert the result to UTC
    pub fn at_local_time(&self, raw_time: &str, offset: &FixedOffset) -> Option<DateTime<Utc>> {
        let time = NaiveTime::parse_from_str(raw_time, TIME_INPUT_FORMAT).ok()?;
        offset
            .from_local_datetime(&self.0.and_time(time))
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

impl fmt::Display for LogDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

/// Time of day label for a stored UTC timestamp
pub fn time_label(time: &DateTime<Utc>, offset: &FixedOffset) -> String {
    time.with_timezone(offset).format(TIME_LABEL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ist() -> FixedOffset {
        FixedOffset::east_opt(330 * 60).unwrap()
    }

    #[test]
    fn test_parse_valid_key() {
        let date = LogDate::parse("01012024").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(date.key(), "01012024");

        let date = LogDate::parse("29022024").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        for raw in ["", "1012024", "010120244", "2024-01-01", "32012024", "29022023", "01a12024", "00012024"] {
            assert!(LogDate::parse(raw).is_none(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_title() {
        assert_eq!(LogDate::parse("01012024").unwrap().title(), "1 Jan 2024");
        assert_eq!(LogDate::parse("15082023").unwrap().title(), "15 Aug 2023");
    }

    #[test]
    fn test_at_local_time_converts_to_utc() {
        let date = LogDate::parse("01012024").unwrap();
        let utc = date.at_local_time("09:30", &ist()).unwrap();
        assert_eq!(utc.to_rfc3339(), "2024-01-01T04:00:00+00:00");

        // Early morning local time falls on the previous UTC day
        let utc = date.at_local_time("02:00", &ist()).unwrap();
        assert_eq!(utc.to_rfc3339(), "2023-12-31T20:30:00+00:00");
    }

    #[test]
    fn test_at_local_time_rejects_garbage() {
        let date = LogDate::parse("01012024").unwrap();
        assert!(date.at_local_time("25:00", &ist()).is_none());
        assert!(date.at_local_time("9.30", &ist()).is_none());
        assert!(date.at_local_time("noon", &ist()).is_none());
    }

    #[test]
    fn test_time_label() {
        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 4, 0, 0).unwrap();
        assert_eq!(time_label(&utc, &ist()), "09:30 am");

        let utc = Utc.with_ymd_and_hms(2024, 1, 1, 15, 35, 0).unwrap();
        assert_eq!(time_label(&utc, &ist()), "09:05 pm");
    }

    #[test]
    fn test_today_round_trips_through_key() {
        let today = LogDate::today(&ist());
        assert_eq!(LogDate::parse(&today.key()), Some(today));
    }
}
