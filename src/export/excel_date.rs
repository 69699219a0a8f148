// src/export/excel_date.rs

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Days from 0001-01-01 (CE day 1) to the Excel epoch 1899-12-30.
const EXCEL_EPOCH_CE_DAYS: i64 = 693_594;

/// Excel serial number of a date-time (days since 1899-12-30, fractional time).
pub(crate) fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let days = dt.date().num_days_from_ce() as i64 - EXCEL_EPOCH_CE_DAYS;
    let secs = dt.time().num_seconds_from_midnight() as f64;

    days as f64 + secs / 86400.0
}

/// A minute amount as a fraction of a day, the way Excel stores durations.
pub(crate) fn minutes_to_excel_fraction(mins: f64) -> f64 {
    mins / 1440.0
}
