/// Utilities for date and time values of form fields
///
/// Field values travel as ISO-like strings (`YYYY-MM-DD`, `YYYY-MM-DDTHH:mm`),
/// the calendar picker works with chrono types. Conversion in both directions lives here.
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::shared::components::ui::input_kind::DateMode;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";
const TIME_FORMAT: &str = "%H:%M";

/// Accepted layouts for values carrying a time of day, tried in order
const DATE_TIME_INPUT_FORMATS: [&str; 5] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Format a picked date for the parent callback
/// Example: 2024-03-15 09:30 -> "2024-03-15" (Date) or "2024-03-15T09:30" (DateTime)
pub fn format_selected_date(selected: NaiveDateTime, mode: DateMode) -> String {
    match mode {
        DateMode::Date => selected.format(DATE_FORMAT).to_string(),
        DateMode::DateTime => selected.format(DATE_TIME_FORMAT).to_string(),
    }
}

/// Same as [`format_selected_date`], a cleared picker yields an empty string
pub fn format_selection(selected: Option<NaiveDateTime>, mode: DateMode) -> String {
    selected
        .map(|dt| format_selected_date(dt, mode))
        .unwrap_or_default()
}

/// Parse a field value into the picker representation.
///
/// Date mode drops the time of day, DateTime mode drops seconds, so a value
/// always compares equal to what the picker would produce for it.
/// Empty or unrecognised values give `None`.
pub fn parse_date_value(value: &str, mode: DateMode) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    let parsed = DATE_TIME_INPUT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_local())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(value, DATE_FORMAT)
                .ok()
                .map(|d| d.and_time(NaiveTime::MIN))
        })?;

    match mode {
        DateMode::Date => Some(parsed.date().and_time(NaiveTime::MIN)),
        DateMode::DateTime => parsed.with_second(0)?.with_nanosecond(0),
    }
}

/// Merge the calendar and the time-of-day controls into one selection.
/// A date without a time means midnight.
pub fn combine_selection(
    date: Option<NaiveDate>,
    time: Option<NaiveTime>,
    mode: DateMode,
) -> Option<NaiveDateTime> {
    let date = date?;
    let time = match mode {
        DateMode::Date => NaiveTime::MIN,
        DateMode::DateTime => time.unwrap_or(NaiveTime::MIN),
    };
    Some(date.and_time(time))
}

/// Value for a native `<input type="time">`
pub fn format_time_value(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

/// Parse the value of a native `<input type="time">` ("HH:MM" or "HH:MM:SS")
pub fn parse_time_value(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Time of day after an edit of the time control.
/// While the user is mid-edit the browser reports "" or a partial value;
/// the previous time stays until a complete one arrives.
pub fn resolve_time_input(reported: &str, previous: Option<NaiveTime>) -> Option<NaiveTime> {
    parse_time_value(reported).or(previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_format_selected_date() {
        let picked = dt(2024, 3, 15, 9, 30);
        assert_eq!(format_selected_date(picked, DateMode::Date), "2024-03-15");
        assert_eq!(
            format_selected_date(picked, DateMode::DateTime),
            "2024-03-15T09:30"
        );
    }

    #[test]
    fn test_format_cleared_selection() {
        assert_eq!(format_selection(None, DateMode::Date), "");
        assert_eq!(format_selection(None, DateMode::DateTime), "");
    }

    #[test]
    fn test_format_keeps_wall_clock() {
        // late evening must not roll over to the next day
        let picked = dt(2024, 12, 31, 23, 45);
        assert_eq!(format_selected_date(picked, DateMode::Date), "2024-12-31");
        assert_eq!(
            format_selected_date(picked, DateMode::DateTime),
            "2024-12-31T23:45"
        );
    }

    #[test]
    fn test_parse_date_value() {
        assert_eq!(
            parse_date_value("2024-03-15", DateMode::Date),
            Some(dt(2024, 3, 15, 0, 0))
        );
        assert_eq!(
            parse_date_value("2024-03-15T09:30", DateMode::DateTime),
            Some(dt(2024, 3, 15, 9, 30))
        );
        assert_eq!(
            parse_date_value("2024-03-15T09:30:42.123", DateMode::DateTime),
            Some(dt(2024, 3, 15, 9, 30))
        );
        assert_eq!(
            parse_date_value("2024-03-15 09:30", DateMode::DateTime),
            Some(dt(2024, 3, 15, 9, 30))
        );
        assert_eq!(
            parse_date_value("2024-03-15T09:30:00+03:00", DateMode::DateTime),
            Some(dt(2024, 3, 15, 9, 30))
        );
    }

    #[test]
    fn test_parse_date_value_mode_truncation() {
        assert_eq!(
            parse_date_value("2024-03-15T09:30", DateMode::Date),
            Some(dt(2024, 3, 15, 0, 0))
        );
        assert_eq!(
            parse_date_value("2024-03-15", DateMode::DateTime),
            Some(dt(2024, 3, 15, 0, 0))
        );
    }

    #[test]
    fn test_parse_invalid_value() {
        assert_eq!(parse_date_value("", DateMode::Date), None);
        assert_eq!(parse_date_value("   ", DateMode::DateTime), None);
        assert_eq!(parse_date_value("invalid", DateMode::Date), None);
        assert_eq!(parse_date_value("2024-13-40", DateMode::Date), None);
    }

    #[test]
    fn test_combine_selection() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15);
        let time = NaiveTime::from_hms_opt(9, 30, 0);
        assert_eq!(
            combine_selection(date, time, DateMode::DateTime),
            Some(dt(2024, 3, 15, 9, 30))
        );
        assert_eq!(
            combine_selection(date, None, DateMode::DateTime),
            Some(dt(2024, 3, 15, 0, 0))
        );
        assert_eq!(
            combine_selection(date, time, DateMode::Date),
            Some(dt(2024, 3, 15, 0, 0))
        );
        assert_eq!(combine_selection(None, time, DateMode::DateTime), None);
    }

    #[test]
    fn test_time_value() {
        let time = NaiveTime::from_hms_opt(9, 30, 0);
        assert_eq!(format_time_value(time), "09:30");
        assert_eq!(format_time_value(None), "");
        assert_eq!(parse_time_value("09:30"), time);
        assert_eq!(parse_time_value("09:30:00"), time);
        assert_eq!(parse_time_value(""), None);
    }

    #[test]
    fn test_resolve_time_input() {
        let previous = NaiveTime::from_hms_opt(9, 30, 0);
        assert_eq!(resolve_time_input("", previous), previous);
        assert_eq!(resolve_time_input("09:", previous), previous);
        assert_eq!(
            resolve_time_input("10:45", previous),
            NaiveTime::from_hms_opt(10, 45, 0)
        );
        assert_eq!(resolve_time_input("", None), None);
    }
}
