// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{minutes_to_excel_fraction, naive_datetime_to_excel_serial};
use crate::export::model::{get_headers, indicator_rows};
use crate::export::notify_export_success;
use crate::models::day_report::DayReport;
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Two sheets: DeadTime (one styled row per interval) and Indicators.
pub(crate) fn export_xlsx(report: &DayReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    write_gap_sheet(workbook.add_worksheet(), report)?;
    write_indicator_sheet(workbook.add_worksheet(), report)?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn cell_format(num_format: &str, bg: Color) -> Format {
    Format::new()
        .set_num_format(num_format)
        .set_align(FormatAlign::Right)
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_gap_sheet(worksheet: &mut Worksheet, report: &DayReport) -> AppResult<()> {
    worksheet.set_name("DeadTime").map_err(to_app_error)?;

    let records = report.records();

    // ---------------------------
    // No intervals
    // ---------------------------
    if records.is_empty() {
        worksheet
            .write(0, 0, "No dead time detected")
            .map_err(to_app_error)?;
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();
    let hdr = header_format();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &hdr)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Rows
    // ---------------------------
    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let datetime_fmt = "yyyy-mm-dd hh:mm:ss";

    let mut col_widths: Vec<usize> = headers
        .iter()
        .map(|h| UnicodeWidthStr::width(*h))
        .collect();
    col_widths[0] = col_widths[0].max(datetime_fmt.len());
    col_widths[1] = col_widths[1].max(datetime_fmt.len());

    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let bg = if row_index % 2 == 0 { band1 } else { band2 };

        worksheet
            .write_with_format(
                row,
                0,
                naive_datetime_to_excel_serial(&rec.start_time),
                &cell_format(datetime_fmt, bg),
            )
            .map_err(to_app_error)?;
        worksheet
            .write_with_format(
                row,
                1,
                naive_datetime_to_excel_serial(&rec.end_time),
                &cell_format(datetime_fmt, bg),
            )
            .map_err(to_app_error)?;
        worksheet
            .write_with_format(row, 2, rec.duration_minutes, &cell_format("0.0", bg))
            .map_err(to_app_error)?;
        worksheet
            .write_with_format(
                row,
                3,
                minutes_to_excel_fraction(rec.duration_minutes),
                &cell_format("[hh]:mm:ss", bg),
            )
            .map_err(to_app_error)?;
    }

    // ---------------------------
    // Set column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn write_indicator_sheet(worksheet: &mut Worksheet, report: &DayReport) -> AppResult<()> {
    worksheet.set_name("Indicators").map_err(to_app_error)?;

    let hdr = header_format();
    let bg = Color::RGB(0xFFFFFF);

    worksheet
        .write_with_format(0, 0, "indicator", &hdr)
        .map_err(to_app_error)?;
    worksheet
        .write_with_format(0, 1, "value", &hdr)
        .map_err(to_app_error)?;

    let rows = indicator_rows(&report.display_indicators());
    let mut name_width = "indicator".len();

    for (i, (name, value)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let num_format = if *name == "loss_percentage" { "0.00" } else { "0.0" };

        worksheet.write(row, 0, *name).map_err(to_app_error)?;
        worksheet
            .write_with_format(row, 1, *value, &cell_format(num_format, bg))
            .map_err(to_app_error)?;

        name_width = name_width.max(UnicodeWidthStr::width(*name));
    }

    worksheet
        .set_column_width(0, name_width as f64 + 2.0)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
