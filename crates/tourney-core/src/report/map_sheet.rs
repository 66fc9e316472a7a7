use crate::aggregate::{build_map_leaderboard, pick_count};
use crate::error::Result;
use crate::model::{BeatmapLookup, Match, PlayerLookup, Team};

use super::{CellStyle, CellValue, SheetSpec, column_letter};

/// 0-based row of the leaderboard table header.
const TABLE_HEADER_ROW: u32 = 5;

/// 0-based column holding raw scores, referenced by the summary formulas.
const SCORE_COL: u16 = 5;

const COLUMN_WIDTHS: &[(u16, f64)] = &[
    (0, 4.0),
    (1, 19.0),
    (2, 4.0),
    (3, 18.0),
    (4, 5.2),
    (5, 9.0),
    (6, 14.0),
    (7, 14.0),
    (8, 9.0),
    (9, 9.0),
    (12, 15.0),
    (13, 12.5),
];

/// One sheet per mappool map: a metadata header block, the ranked score
/// table, and pick/average/median summary cells.
pub fn build_map_sheet(
    map: &BeatmapLookup,
    matches: &[Match],
    players: &[PlayerLookup],
    teams: &[Team],
) -> Result<SheetSpec> {
    let mut sheet = SheetSpec::new(map.title());
    for &(col, width) in COLUMN_WIDTHS {
        sheet.column_width(col, width);
    }

    write_header_block(&mut sheet, map);

    for (col, header) in [
        "Pos", "Team", "Cn.", "Player", "Grade", "Score", "Combo", "Accuracy", "Mods",
    ]
    .into_iter()
    .enumerate()
    {
        sheet.label(TABLE_HEADER_ROW, col as u16, header);
    }

    let entries = build_map_leaderboard(matches, players, teams, map.id())?;

    let mut row = TABLE_HEADER_ROW;
    for entry in &entries {
        row += 1;
        sheet.set(
            row,
            0,
            CellValue::Int(entry.position as i64),
            CellStyle::bold(),
        );
        match &entry.team {
            Some(team) => sheet.text(row, 1, team),
            None => sheet.set(row, 1, CellValue::Blank, CellStyle::default()),
        }
        sheet.text(row, 2, &entry.country);
        sheet.text(row, 3, &entry.username);
        match entry.grade {
            Some(grade) => sheet.set(
                row,
                4,
                CellValue::Text(grade.short_name().to_string()),
                CellStyle::bold(),
            ),
            None => sheet.set(row, 4, CellValue::Blank, CellStyle::default()),
        }
        sheet.int(row, SCORE_COL, entry.score as i64);
        sheet.int(row, 6, i64::from(entry.combo));
        match entry.accuracy {
            Some(acc) => sheet.set(
                row,
                7,
                CellValue::Number(acc),
                CellStyle {
                    percent: true,
                    ..CellStyle::default()
                },
            ),
            None => sheet.set(row, 7, CellValue::Blank, CellStyle::default()),
        }
        sheet.text(row, 8, entry.mods.to_string());
        sheet.set(
            row,
            9,
            CellValue::Hyperlink {
                url: format!("https://osu.ppy.sh/community/matches/{}", entry.match_id),
                label: "match".to_string(),
            },
            CellStyle::default(),
        );
    }

    write_summary_cells(&mut sheet, matches, map.id(), entries.len());

    Ok(sheet)
}

fn write_header_block(sheet: &mut SheetSpec, map: &BeatmapLookup) {
    let bold = CellStyle::bold();
    let wrap = CellStyle {
        wrap: true,
        ..CellStyle::default()
    };

    sheet.merged(0, 0, 2, 2, CellValue::Text("Title".into()), bold);
    sheet.merged(0, 2, 2, 3, CellValue::Text(map.title()), wrap);

    let BeatmapLookup::Resolved(map) = map else {
        // Placeholder map: identifier and sentinel title only.
        return;
    };

    sheet.merged(2, 0, 2, 2, CellValue::Text("Mapset Host".into()), bold);
    sheet.merged(0, 5, 2, 1, CellValue::Text("Artist".into()), bold);
    sheet.merged(2, 5, 2, 1, CellValue::Text("Difficulty".into()), bold);
    sheet.merged(
        2,
        2,
        2,
        3,
        CellValue::Text(map.creator.clone()),
        CellStyle::default(),
    );
    sheet.merged(
        0,
        6,
        2,
        2,
        CellValue::Text(map.artist.clone()),
        CellStyle::default(),
    );
    sheet.merged(
        2,
        6,
        2,
        2,
        CellValue::Text(map.difficulty_name.clone()),
        CellStyle::default(),
    );

    sheet.label(0, 8, "SR");
    sheet.label(1, 8, "AR");
    sheet.label(2, 8, "HP");
    sheet.label(3, 8, "Combo");
    sheet.number(0, 9, map.star_rating);
    sheet.number(1, 9, map.approach_rate);
    sheet.number(2, 9, map.health_drain);
    sheet.int(3, 9, i64::from(map.max_combo));

    sheet.label(0, 10, "CS");
    sheet.label(1, 10, "OD");
    sheet.label(2, 10, "Length");
    sheet.label(3, 10, "BPM");
    sheet.number(0, 11, map.circle_size);
    sheet.number(1, 11, map.overall_difficulty);
    sheet.number(2, 11, map.length_secs);
    sheet.number(3, 11, map.bpm);
}

fn write_summary_cells(sheet: &mut SheetSpec, matches: &[Match], map_id: u64, rows: usize) {
    sheet.label(0, 12, "Picks");
    sheet.int(0, 13, pick_count(matches, map_id) as i64);
    sheet.label(1, 12, "Average score");
    sheet.label(2, 12, "Median score");

    if rows == 0 {
        return;
    }

    // 1-based spreadsheet rows of the rendered score column.
    let first = TABLE_HEADER_ROW + 2;
    let last = TABLE_HEADER_ROW + 1 + rows as u32;
    let range = format!(
        "{col}{first}:{col}{last}",
        col = column_letter(SCORE_COL),
    );
    sheet.set(
        1,
        13,
        CellValue::Formula(format!("AVERAGE({})", range)),
        CellStyle::default(),
    );
    sheet.set(
        2,
        13,
        CellValue::Formula(format!("MEDIAN({})", range)),
        CellStyle::default(),
    );
}
