// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{DayExport, gap_rows, get_headers};
use crate::export::notify_export_success;
use crate::models::day_report::DayReport;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(report: &DayReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&DayExport::from(report))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Interval rows only; indicators live in the JSON and XLSX outputs.
pub(crate) fn export_csv(report: &DayReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let rows = gap_rows(report);
    let mut wtr = csv::Writer::from_path(path)?;

    // serde writes the header with the first row only
    if rows.is_empty() {
        wtr.write_record(get_headers())?;
    }

    for item in &rows {
        wtr.serialize(item)?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}
