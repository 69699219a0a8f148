// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::day_report::DayReport;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::env;
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// Export of one analyzed day.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: absolute output path; `None` → `dead_time_<machine>_<date>.<ext>`
    ///   in the current directory
    /// - `force`: overwrite without asking
    pub fn export(
        report: &DayReport,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => {
                let p = PathBuf::from(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!(
                        "Output file path must be absolute: {f}"
                    )));
                }
                p
            }
            None => env::current_dir()?.join(default_file_name(
                &report.machine,
                report.date,
                format,
            )),
        };

        ensure_writable(&path, force)?;

        if report.intervals.is_empty() {
            warning("No dead time detected for this day: exporting an empty table.");
        }

        write(report, format, &path)?;
        Ok(path)
    }
}

fn write(report: &DayReport, format: ExportFormat, path: &Path) -> AppResult<()> {
    match format {
        ExportFormat::Csv => export_csv(report, path),
        ExportFormat::Json => export_json(report, path),
        ExportFormat::Xlsx => export_xlsx(report, path),
    }
}

/// `dead_time_<machine>_<date>.<ext>`, machine reduced to filename-safe chars.
pub fn default_file_name(machine: &str, date: NaiveDate, format: ExportFormat) -> String {
    let safe: String = machine
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    format!(
        "dead_time_{}_{}.{}",
        safe,
        date.format("%Y-%m-%d"),
        format.as_str()
    )
}
