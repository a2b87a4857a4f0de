//! Date and time-of-day validators
//!
//! Dates use the HTML `<input type="date">` format (`YYYY-MM-DD`) and times
//! the `<input type="time">` format (`HH:MM`, seconds tolerated). All
//! comparisons take the current local date-time as an argument.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

pub const PAST_DATE_MESSAGE: &str = "Date must be today or later";
pub const INVALID_DATE_MESSAGE: &str = "Please enter a valid date";
pub const PAST_TIME_MESSAGE: &str = "Allocation time cannot be in the past for today";
pub const INVALID_TIME_MESSAGE: &str = "Please enter a valid time";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Date must be today or later, compared at day granularity
pub fn validate_not_past_date(value: &str, now: NaiveDateTime) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    match parse_date(value) {
        Some(date) if date < now.date() => Err(PAST_DATE_MESSAGE.to_string()),
        Some(_) => Ok(()),
        None => Err(INVALID_DATE_MESSAGE.to_string()),
    }
}

/// When `date` is today, the time must be strictly later than the current
/// wall-clock minute. Any other date (or no date yet) leaves the time
/// unconstrained.
pub fn validate_time_after_now(
    value: &str,
    date: Option<&str>,
    now: NaiveDateTime,
) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    let Some(time) = parse_time(value) else {
        return Err(INVALID_TIME_MESSAGE.to_string());
    };

    let selected = match date.and_then(parse_date) {
        Some(selected) => selected,
        None => return Ok(()),
    };
    if selected != now.date() {
        return Ok(());
    }

    let wanted = (time.hour(), time.minute());
    let current = (now.hour(), now.minute());
    if wanted <= current {
        Err(PAST_TIME_MESSAGE.to_string())
    } else {
        Ok(())
    }
}

/// Reduces a time string to `HH:MM`.
///
/// Anything after the first space (an `AM`/`PM` suffix) is dropped, then
/// only the first two colon-separated components are kept.
pub fn normalize_time(raw: &str) -> String {
    let clock = raw.split_whitespace().next().unwrap_or_default();
    clock.split(':').take(2).collect::<Vec<_>>().join(":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn at(date: &str, time: &str) -> NaiveDateTime {
        NaiveDateTime::new(parse_date(date).unwrap(), parse_time(time).unwrap())
    }

    #[rstest]
    #[case("2026-10-17", true)]
    #[case("2025-12-31", true)]
    #[case("2026-10-18", false)]
    #[case("2026-10-19", false)]
    #[case("2099-01-01", false)]
    fn test_not_past_date(#[case] date: &str, #[case] rejected: bool) {
        let now = at("2026-10-18", "23:59");
        assert_eq!(validate_not_past_date(date, now).is_err(), rejected);
    }

    #[test]
    fn test_date_garbage() {
        let now = at("2026-10-18", "09:00");
        assert_eq!(
            validate_not_past_date("18/10/2026", now).unwrap_err(),
            INVALID_DATE_MESSAGE
        );
        assert!(validate_not_past_date("", now).is_ok());
    }

    #[rstest]
    #[case("09:00", true)]
    #[case("10:30", true)]
    #[case("10:31", false)]
    #[case("23:00", false)]
    fn test_time_today(#[case] time: &str, #[case] rejected: bool) {
        let now = at("2026-10-18", "10:30");
        let result = validate_time_after_now(time, Some("2026-10-18"), now);
        assert_eq!(result.is_err(), rejected);
    }

    #[test]
    fn test_time_tomorrow_is_unconstrained() {
        let now = at("2026-10-18", "23:59");
        assert!(validate_time_after_now("00:00", Some("2026-10-19"), now).is_ok());
    }

    #[test]
    fn test_time_without_date() {
        let now = at("2026-10-18", "12:00");
        assert!(validate_time_after_now("08:00", None, now).is_ok());
        assert!(validate_time_after_now("08:00", Some(""), now).is_ok());
        assert_eq!(
            validate_time_after_now("8 o'clock", None, now).unwrap_err(),
            INVALID_TIME_MESSAGE
        );
    }

    #[rstest]
    #[case("10:00 AM", "10:00")]
    #[case("02:15 PM", "02:15")]
    #[case("10:00:00", "10:00")]
    #[case("10:00:00 AM", "10:00")]
    #[case("  09:05  ", "09:05")]
    #[case("10:00", "10:00")]
    #[case("", "")]
    fn test_normalize_time(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_time(raw), expected);
    }
}
