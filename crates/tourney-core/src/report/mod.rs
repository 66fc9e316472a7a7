//! Sheet specifications: a sink-agnostic description of the finished report.
//!
//! The builder emits named grids of typed cells with minimal style hints;
//! any spreadsheet sink can replay them, repeatedly if a save fails, without
//! recomputing the aggregation.

mod map_sheet;
mod summary_sheet;

pub use map_sheet::build_map_sheet;
pub use summary_sheet::build_summary_sheet;

use crate::error::Result;
use crate::model::{BeatmapLookup, Match, PlayerLookup, Team};

/// A typed cell value. Formulas are spreadsheet expressions without the
/// leading `=`; their ranges always cover exactly the rendered rows so the
/// sink's output stays correct if rows are edited later.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Text(String),
    Int(i64),
    Number(f64),
    Formula(String),
    Hyperlink { url: String, label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub bold: bool,
    /// Render as a percentage with two decimals.
    pub percent: bool,
    pub wrap: bool,
}

impl CellStyle {
    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }
}

/// A single cell. Spans above 1x1 describe a merged range anchored here.
#[derive(Debug, Clone, PartialEq)]
pub struct CellSpec {
    pub row: u32,
    pub col: u16,
    pub row_span: u32,
    pub col_span: u16,
    pub value: CellValue,
    pub style: CellStyle,
}

/// One named sheet of the report, in sink-ready form.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSpec {
    pub name: String,
    pub cells: Vec<CellSpec>,
    pub column_widths: Vec<(u16, f64)>,
}

impl SheetSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: Vec::new(),
            column_widths: Vec::new(),
        }
    }

    pub fn set(&mut self, row: u32, col: u16, value: CellValue, style: CellStyle) {
        self.cells.push(CellSpec {
            row,
            col,
            row_span: 1,
            col_span: 1,
            value,
            style,
        });
    }

    pub fn merged(
        &mut self,
        row: u32,
        col: u16,
        row_span: u32,
        col_span: u16,
        value: CellValue,
        style: CellStyle,
    ) {
        self.cells.push(CellSpec {
            row,
            col,
            row_span,
            col_span,
            value,
            style,
        });
    }

    pub fn text(&mut self, row: u32, col: u16, text: impl Into<String>) {
        self.set(row, col, CellValue::Text(text.into()), CellStyle::default());
    }

    pub fn label(&mut self, row: u32, col: u16, text: impl Into<String>) {
        self.set(row, col, CellValue::Text(text.into()), CellStyle::bold());
    }

    pub fn int(&mut self, row: u32, col: u16, value: i64) {
        self.set(row, col, CellValue::Int(value), CellStyle::default());
    }

    pub fn number(&mut self, row: u32, col: u16, value: f64) {
        self.set(row, col, CellValue::Number(value), CellStyle::default());
    }

    pub fn column_width(&mut self, col: u16, width: f64) {
        self.column_widths.push((col, width));
    }

    /// Cell at the given coordinates, if one was written.
    pub fn cell_at(&self, row: u32, col: u16) -> Option<&CellSpec> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }
}

/// Spreadsheet column letter for a 0-based column index (`0` -> `A`,
/// `25` -> `Z`, `26` -> `AA`).
pub(crate) fn column_letter(col: u16) -> String {
    let mut col = u32::from(col);
    let mut name = String::new();
    loop {
        name.insert(0, char::from(b'A' + (col % 26) as u8));
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    name
}

/// Build the complete report: one event-wide player summary sheet followed
/// by one sheet per mappool map, in mappool order.
pub fn build_report(
    maps: &[BeatmapLookup],
    matches: &[Match],
    players: &[PlayerLookup],
    teams: &[Team],
) -> Result<Vec<SheetSpec>> {
    let mut sheets = Vec::with_capacity(maps.len() + 1);
    sheets.push(build_summary_sheet(maps, matches, players));
    for map in maps {
        sheets.push(build_map_sheet(map, matches, players, teams)?);
    }
    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), "A");
        assert_eq!(column_letter(5), "F");
        assert_eq!(column_letter(25), "Z");
        assert_eq!(column_letter(26), "AA");
        assert_eq!(column_letter(27), "AB");
        assert_eq!(column_letter(51), "AZ");
        assert_eq!(column_letter(52), "BA");
    }
}
