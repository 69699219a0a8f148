// src/export/model.rs

use crate::models::day_report::{DayIndicators, DayReport};
use crate::models::interval::IntervalRecord;
use crate::utils::time::format_minutes_hms;
use serde::Serialize;

pub(crate) const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// One dead-time interval as written to CSV/JSON rows.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct GapExport {
    pub start_time: String,
    pub end_time: String,
    pub duration_minutes: f64,
    pub duration: String,
}

impl From<&IntervalRecord> for GapExport {
    fn from(r: &IntervalRecord) -> Self {
        Self {
            start_time: r.start_time.format(DATETIME_FMT).to_string(),
            end_time: r.end_time.format(DATETIME_FMT).to_string(),
            duration_minutes: r.duration_minutes,
            duration: format_minutes_hms(r.duration_minutes),
        }
    }
}

/// Full JSON document: query, rounded indicators and interval rows.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub machine: String,
    pub date: String,
    pub threshold_minutes: i64,
    pub indicators: DayIndicators,
    pub intervals: Vec<GapExport>,
}

impl From<&DayReport> for DayExport {
    fn from(r: &DayReport) -> Self {
        Self {
            machine: r.machine.clone(),
            date: r.date.format("%Y-%m-%d").to_string(),
            threshold_minutes: r.threshold,
            indicators: r.display_indicators(),
            intervals: gap_rows(r),
        }
    }
}

pub(crate) fn gap_rows(report: &DayReport) -> Vec<GapExport> {
    report.records().iter().map(GapExport::from).collect()
}

/// Column names of the DeadTime table (CSV and XLSX).
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["start_time", "end_time", "duration_minutes", "duration"]
}

/// Label/value rows of the indicator sheet.
pub(crate) fn indicator_rows(ind: &DayIndicators) -> Vec<(&'static str, f64)> {
    vec![
        ("total_available", ind.total_available),
        ("scheduled_unavailable", ind.scheduled_unavailable),
        ("net", ind.net),
        ("unplanned_lost", ind.unplanned_lost),
        ("loss_percentage", ind.loss_percentage),
    ]
}
