//! One-line textual picture of the shift: dead time, pauses and activity.

use crate::models::day_report::DayReport;
use crate::utils::colors::{BLUE, GREY, RED, enabled, paint};
use chrono::TimeDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Active,
    Pause,
    Dead,
}

impl Cell {
    fn glyph(&self) -> char {
        match self {
            Cell::Active => '·',
            Cell::Pause => '▒',
            Cell::Dead => '█',
        }
    }

    fn color(&self) -> &'static str {
        match self {
            Cell::Active => GREY,
            Cell::Pause => BLUE,
            Cell::Dead => RED,
        }
    }
}

/// Classify each `cell_minutes` slot of the shift by its midpoint.
/// The cell size is clamped to `1..=shift length`.
pub fn cells(report: &DayReport, cell_minutes: i64) -> Vec<Cell> {
    let shift_len = (report.shift.end - report.shift.start).num_minutes().max(1);
    let step = TimeDelta::minutes(cell_minutes.clamp(1, shift_len));
    let half = step / 2;
    let mut out = Vec::new();

    let mut t = report.shift.start;
    while t < report.shift.end {
        let mid = t + half;
        let cell = if report.pauses.iter().any(|p| p.as_interval().contains(mid)) {
            Cell::Pause
        } else if report.intervals.iter().any(|iv| iv.contains(mid)) {
            Cell::Dead
        } else {
            Cell::Active
        };
        out.push(cell);
        t += step;
    }

    out
}

pub fn render_plain(report: &DayReport, cell_minutes: i64) -> String {
    cells(report, cell_minutes).iter().map(Cell::glyph).collect()
}

/// Strip framed by the shift bounds, e.g. `06:00 ··██▒▒·· 16:00`.
pub fn render(report: &DayReport, cell_minutes: i64) -> String {
    let body = if enabled() {
        cells(report, cell_minutes)
            .iter()
            .map(|c| paint(&c.glyph().to_string(), c.color()))
            .collect()
    } else {
        render_plain(report, cell_minutes)
    };

    format!(
        "{} {} {}",
        report.shift.start.format("%H:%M"),
        body,
        report.shift.end.format("%H:%M")
    )
}
