// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Summary};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const LOG_SHEET: &str = "Study Log";
const SUMMARY_SHEET: &str = "Summary";

const LOG_HEADERS: [&str; 2] = ["Date", "Minutes"];
const SUMMARY_HEADERS: [&str; 5] = [
    "Total Days Tracked",
    "Total Minutes Studied",
    "Average Minutes per Day",
    "Daily Goal (min)",
    "Days Goal Met",
];

/// Export the study log and its summary as a styled two-sheet workbook.
/// Callers must not pass an empty table.
pub fn export_xlsx(entries: &[Entry], summary: &Summary, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    // ---------------------------
    // Sheet 1: raw study log
    // ---------------------------
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|e| vec![e.date_str(), e.minutes.to_string()])
        .collect();

    let sheet = workbook.add_worksheet();
    sheet.set_name(LOG_SHEET).map_err(to_app_error)?;
    write_sheet(sheet, &LOG_HEADERS, &rows)?;

    // ---------------------------
    // Sheet 2: one-row summary
    // ---------------------------
    let summary_rows = vec![vec![
        summary.total_days.to_string(),
        summary.total_minutes.to_string(),
        format!("{:.2}", summary.average_minutes),
        summary.goal.to_string(),
        summary.met_goal_days.to_string(),
    ]];

    let sheet = workbook.add_worksheet();
    sheet.set_name(SUMMARY_SHEET).map_err(to_app_error)?;
    write_sheet(sheet, &SUMMARY_HEADERS, &summary_rows)?;

    workbook.save(path_str(path)?).map_err(to_app_error)?;
    Ok(())
}

/// Write one sheet: styled header, banded rows, auto column widths.
fn write_sheet(sheet: &mut Worksheet, headers: &[&str], rows: &[Vec<String>]) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    sheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in values.iter().enumerate() {
            write_cell(sheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        sheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

/// Write a single cell, right-aligning anything that parses as a number.
/// Dates stay as text, matching the CSV on disk.
fn write_cell(sheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    if let Ok(num) = s.parse::<f64>() {
        let fmt = Format::new()
            .set_align(FormatAlign::Right)
            .set_background_color(bg)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);

        sheet
            .write_with_format(row, col, num, &fmt)
            .map_err(to_app_error)?;
        return Ok(());
    }

    let fmt = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    sheet
        .write_with_format(row, col, s, &fmt)
        .map_err(to_app_error)?;

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

fn path_str(path: &Path) -> AppResult<&str> {
    path.to_str()
        .ok_or_else(|| AppError::Export("invalid path".to_string()))
}
