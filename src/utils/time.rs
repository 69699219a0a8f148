//! Time utilities: parsing HH:MM, window strings, duration computations, formatting minutes, etc.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_time_strict(t: &str) -> AppResult<NaiveTime> {
    parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))
}

/// Parse a window expressed as `HH:MM-HH:MM` (e.g. `12:00-12:40`).
pub fn parse_window(s: &str) -> Option<(NaiveTime, NaiveTime)> {
    let (start, end) = s.split_once('-')?;
    let start = parse_time(start)?;
    let end = parse_time(end)?;

    if end > start { Some((start, end)) } else { None }
}

/// Exact minutes from `start` to `end` (negative if `end` precedes `start`).
pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> f64 {
    (end - start).num_milliseconds() as f64 / 60_000.0
}

/// Format a minute amount as `HH:MM:SS`, rounding to the nearest second.
pub fn format_minutes_hms(mins: f64) -> String {
    let total_secs = (mins * 60.0).round() as i64;
    let sign = if total_secs < 0 { "-" } else { "" };
    let s = total_secs.abs();
    format!("{}{:02}:{:02}:{:02}", sign, s / 3600, (s % 3600) / 60, s % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_parsing() {
        let (s, e) = parse_window("12:00-12:40").unwrap();
        assert_eq!(s, NaiveTime::from_hms_opt(12, 0, 0).unwrap());
        assert_eq!(e, NaiveTime::from_hms_opt(12, 40, 0).unwrap());

        assert!(parse_window(" 08:00 - 08:20 ").is_some());
        assert!(parse_window("12:40-12:00").is_none());
        assert!(parse_window("noon").is_none());
    }

    #[test]
    fn hms_formatting() {
        assert_eq!(format_minutes_hms(0.0), "00:00:00");
        assert_eq!(format_minutes_hms(1.5), "00:01:30");
        assert_eq!(format_minutes_hms(540.0), "09:00:00");
        assert_eq!(format_minutes_hms(-2.0), "-00:02:00");
    }
}
