//! Calendar date parsing and rendering for exercise records.
//!
//! Dates arrive as free text from forms and query strings. Parsing returns an
//! explicit [`Result`] so callers decide whether a bad value is ignored
//! (log filters) or replaced (exercise creation).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

/// Format used when a date is shown to a user, e.g. `Mon Oct 31 1994`
pub const HUMAN_READABLE_FORMAT: &str = "%a %b %d %Y";

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("date is empty")]
    Empty,
    #[error("\"{0}\" is not a valid calendar date")]
    Invalid(String),
}

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 date-times, naive `YYYY-MM-DDTHH:MM:SS`
/// and the human readable form produced by [`human_readable`].
pub fn parse_calendar_date(value: &str) -> Result<NaiveDate, DateParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateParseError::Empty);
    }

    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT)
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|d| d.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(value, NAIVE_DATE_TIME_FORMAT).map(|d| d.date()))
        .or_else(|_| NaiveDate::parse_from_str(value, HUMAN_READABLE_FORMAT))
        .map_err(|_| DateParseError::Invalid(value.to_owned()))
}

pub fn human_readable(date: NaiveDate) -> String {
    date.format(HUMAN_READABLE_FORMAT).to_string()
}

#[cfg(test)]
mod test {
    use chrono::NaiveDate;

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_calendar_date("2020-01-31"), Ok(ymd(2020, 1, 31)));
        assert_eq!(parse_calendar_date("  2020-01-31 "), Ok(ymd(2020, 1, 31)));
    }

    #[test]
    fn test_parse_date_times() {
        assert_eq!(parse_calendar_date("2020-06-15T10:30:00Z"), Ok(ymd(2020, 6, 15)));
        assert_eq!(parse_calendar_date("2020-06-15T10:30:00+02:00"), Ok(ymd(2020, 6, 15)));
        assert_eq!(parse_calendar_date("2020-06-15T10:30:00"), Ok(ymd(2020, 6, 15)));
    }

    #[test]
    fn test_date_time_keeps_its_own_offset() {
        // 04:30 UTC on the 16th
        assert_eq!(parse_calendar_date("2020-06-15T23:30:00-05:00"), Ok(ymd(2020, 6, 15)));
        assert_eq!(parse_calendar_date("2020-06-16T00:30:00+09:00"), Ok(ymd(2020, 6, 16)));
    }

    #[test]
    fn test_parse_human_readable() {
        assert_eq!(parse_calendar_date("Mon Oct 31 1994"), Ok(ymd(1994, 10, 31)));
    }

    #[test]
    fn test_rejects_impossible_and_garbage_dates() {
        assert_eq!(parse_calendar_date(""), Err(DateParseError::Empty));
        assert_eq!(parse_calendar_date("   "), Err(DateParseError::Empty));
        assert!(matches!(parse_calendar_date("2020-02-30"), Err(DateParseError::Invalid(_))));
        assert!(matches!(parse_calendar_date("yesterday"), Err(DateParseError::Invalid(_))));
        assert!(matches!(parse_calendar_date("2020-13-01"), Err(DateParseError::Invalid(_))));
    }

    #[test]
    fn test_human_readable_pads_day() {
        assert_eq!(human_readable(ymd(1994, 10, 31)), "Mon Oct 31 1994");
        assert_eq!(human_readable(ymd(2020, 3, 2)), "Mon Mar 02 2020");
    }
}
