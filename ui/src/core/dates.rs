//! Calendar-date parsing and whole-day arithmetic.
//!
//! Remote rows carry dates as `YYYY-MM-DD` strings with no time component;
//! this module is the single place they are validated. All day differences
//! are whole calendar days (julian-day subtraction), never elapsed-24h
//! windows, so intraday timing can't introduce off-by-one errors.

use time::{macros::format_description, Date, OffsetDateTime};

use super::CoreError;

const ISO_DATE: &[time::format_description::BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// Parse a `YYYY-MM-DD` string, rejecting anything malformed.
pub fn parse_iso_date(raw: &str) -> Result<Date, CoreError> {
    Date::parse(raw.trim(), &ISO_DATE)
        .map_err(|err| CoreError::InvalidArgument(format!("bad date {raw:?}: {err}")))
}

pub fn format_iso_date(date: Date) -> String {
    date.format(&ISO_DATE).unwrap_or_default()
}

/// Parse a batch of date strings, dropping malformed entries instead of
/// failing the whole batch. Returns the parsed dates plus the dropped
/// count so callers can log it; one bad row must not poison a streak.
pub fn parse_dates_lossy<'a, I>(raw: I) -> (Vec<Date>, usize)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut dates = Vec::new();
    let mut dropped = 0usize;
    for item in raw {
        match parse_iso_date(item) {
            Ok(date) => dates.push(date),
            Err(_) => dropped += 1,
        }
    }
    (dates, dropped)
}

/// Whole calendar days from `earlier` to `later` (negative if reversed).
pub fn days_between(earlier: Date, later: Date) -> i64 {
    i64::from(later.to_julian_day()) - i64::from(earlier.to_julian_day())
}

/// Today as a calendar date (UTC). Streaks and expiry work in whole days,
/// so the date boundary used here only shifts results near midnight.
pub fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Current wall-clock hour (0-23) for segment selection.
#[cfg(target_arch = "wasm32")]
pub fn current_hour() -> u8 {
    js_sys::Date::new_0().get_hours() as u8
}

/// Current wall-clock hour (0-23) for segment selection. Falls back to
/// UTC when the local offset can't be determined (multi-threaded startup
/// on some unixes).
#[cfg(not(target_arch = "wasm32"))]
pub fn current_hour() -> u8 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .hour()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn parses_plain_iso_dates() {
        assert_eq!(parse_iso_date("2026-08-29").unwrap(), date!(2026 - 08 - 29));
        assert_eq!(parse_iso_date(" 2026-01-02 ").unwrap(), date!(2026 - 01 - 02));
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in ["2026/08/29", "29-08-2026", "2026-13-01", "2026-02-30", "", "soon"] {
            assert!(parse_iso_date(raw).is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn lossy_parse_keeps_good_rows() {
        let (dates, dropped) = parse_dates_lossy(["2026-08-29", "garbage", "2026-08-28"]);
        assert_eq!(dates.len(), 2);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn day_difference_is_calendar_based() {
        assert_eq!(days_between(date!(2026 - 08 - 28), date!(2026 - 08 - 29)), 1);
        assert_eq!(days_between(date!(2026 - 08 - 29), date!(2026 - 08 - 29)), 0);
        assert_eq!(days_between(date!(2026 - 09 - 01), date!(2026 - 08 - 29)), -3);
        // Month and year boundaries are just consecutive days.
        assert_eq!(days_between(date!(2025 - 12 - 31), date!(2026 - 01 - 01)), 1);
    }
}
