//! xlsx sink: renders sheet specifications with rust_xlsxwriter.

use std::collections::HashSet;
use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook, Worksheet, XlsxError};
use tourney_core::report::{CellSpec, CellStyle, CellValue, SheetSpec};

/// Excel's sheet name character limit.
const MAX_SHEET_NAME_LEN: usize = 31;

pub fn write_spreadsheet(path: &Path, sheets: &[SheetSpec]) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let mut used_names = HashSet::new();

    for spec in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(unique_name(&spec.name, &mut used_names))?;

        for &(col, width) in &spec.column_widths {
            worksheet.set_column_width(col, width)?;
        }
        for cell in &spec.cells {
            write_cell(worksheet, cell)?;
        }
    }

    workbook.save(path)
}

fn write_cell(worksheet: &mut Worksheet, cell: &CellSpec) -> Result<(), XlsxError> {
    let format = format_for(cell.style);

    if cell.row_span > 1 || cell.col_span > 1 {
        let text = match &cell.value {
            CellValue::Text(s) => s.as_str(),
            _ => "",
        };
        worksheet.merge_range(
            cell.row,
            cell.col,
            cell.row + cell.row_span - 1,
            cell.col + cell.col_span - 1,
            text,
            &format,
        )?;
        return Ok(());
    }

    match &cell.value {
        CellValue::Blank => {}
        CellValue::Text(s) => {
            worksheet.write_string_with_format(cell.row, cell.col, s, &format)?;
        }
        CellValue::Int(i) => {
            worksheet.write_number_with_format(cell.row, cell.col, *i as f64, &format)?;
        }
        CellValue::Number(n) => {
            worksheet.write_number_with_format(cell.row, cell.col, *n, &format)?;
        }
        CellValue::Formula(f) => {
            worksheet.write_formula_with_format(cell.row, cell.col, f.as_str(), &format)?;
        }
        CellValue::Hyperlink { url, label } => {
            worksheet.write_url_with_text(cell.row, cell.col, url.as_str(), label)?;
        }
    }
    Ok(())
}

fn format_for(style: CellStyle) -> Format {
    let mut format = Format::new()
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    if style.bold {
        format = format.set_bold();
    }
    if style.percent {
        format = format.set_num_format("#0.00%");
    }
    if style.wrap {
        format = format.set_text_wrap();
    }
    format
}

/// Strip characters Excel rejects, enforce the length limit, and make the
/// name unique within the workbook.
fn unique_name(name: &str, used: &mut HashSet<String>) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | ':' | '*' | '?' | '/' | '\\'))
        .take(MAX_SHEET_NAME_LEN)
        .collect();
    let base = if cleaned.trim().is_empty() {
        "Sheet".to_string()
    } else {
        cleaned
    };

    let mut candidate = base.clone();
    let mut suffix = 2;
    while !used.insert(candidate.clone()) {
        let tail = format!(" ({})", suffix);
        let keep = MAX_SHEET_NAME_LEN.saturating_sub(tail.len());
        candidate = format!("{}{}", base.chars().take(keep).collect::<String>(), tail);
        suffix += 1;
    }
    candidate
}
