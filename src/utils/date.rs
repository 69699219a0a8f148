use chrono::{Datelike, NaiveDate, Weekday};

/// Accepts `YYYY-MM-DD` and the day-first `DD/MM/YYYY` used by spreadsheets.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

pub fn generate_from_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(p, "%Y-%m-%d") {
        return Ok(vec![d]);
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(dm) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return Ok(all_days_of_month(dm.year(), dm.month()));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Ok(all_days_of_year(year));
    }

    Err(format!("unrecognized period `{}`", p))
}

/// Longest `A:B` range accepted, in days (about ten years).
pub const MAX_RANGE_DAYS: i64 = 3660;

pub fn generate_range(start: &str, end: &str) -> Result<Vec<NaiveDate>, String> {
    let s = generate_from_period(start)?;
    let e = generate_from_period(end)?;

    let (Some(&start_date), Some(&end_date)) = (s.first(), e.last()) else {
        return Err(format!("Invalid range: {}:{}", start, end));
    };

    if end_date < start_date {
        return Err(format!("Range end precedes start: {}:{}", start, end));
    }

    let span = (end_date - start_date).num_days() + 1;
    if span > MAX_RANGE_DAYS {
        return Err(format!(
            "range {}:{} spans {} days, limit is {}",
            start, end, span, MAX_RANGE_DAYS
        ));
    }

    Ok(start_date.iter_days().take_while(|d| *d <= end_date).collect())
}

/// Resolve a `--period` expression: a single period or `A:B`.
pub fn resolve_period(p: &str) -> Result<Vec<NaiveDate>, String> {
    match p.split_once(':') {
        Some((start, end)) => generate_range(start, end),
        None => generate_from_period(p),
    }
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.iter_days().take_while(|d| d.month() == month).collect(),
        None => Vec::new(),
    }
}

pub fn all_days_of_year(year: i32) -> Vec<NaiveDate> {
    match NaiveDate::from_ymd_opt(year, 1, 1) {
        Some(first) => first.iter_days().take_while(|d| d.year() == year).collect(),
        None => Vec::new(),
    }
}

pub fn weekday_name(d: NaiveDate) -> &'static str {
    match d.weekday() {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
