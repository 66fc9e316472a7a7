use crate::aggregate::{player_scores_on_map, rank_players};
use crate::model::{BeatmapLookup, Match, PlayerLookup};

use super::{CellStyle, CellValue, SheetSpec};

/// Separator between multiple scores by one player on the same map.
const SCORE_SEPARATOR: &str = " / ";

/// Event-wide player summary: rank, name, total score, then one column per
/// mappool map listing every score the player posted on it.
pub fn build_summary_sheet(
    maps: &[BeatmapLookup],
    matches: &[Match],
    players: &[PlayerLookup],
) -> SheetSpec {
    let mut sheet = SheetSpec::new("Players");
    sheet.column_width(0, 5.0);
    sheet.column_width(1, 18.0);
    sheet.column_width(2, 12.0);

    sheet.label(0, 0, "Rank");
    sheet.label(0, 1, "Player");
    sheet.label(0, 2, "Total Score");
    for (i, map) in maps.iter().enumerate() {
        let col = 3 + i as u16;
        sheet.label(0, col, map.title());
        sheet.column_width(col, 14.0);
    }

    for (i, standing) in rank_players(matches, players).iter().enumerate() {
        let row = 1 + i as u32;
        sheet.set(
            row,
            0,
            CellValue::Int(standing.position as i64),
            CellStyle::bold(),
        );
        sheet.text(row, 1, &standing.username);
        sheet.int(row, 2, standing.total as i64);

        for (m, map) in maps.iter().enumerate() {
            let scores = player_scores_on_map(matches, standing.player_id, map.id());
            if scores.is_empty() {
                continue;
            }
            let joined = scores
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(SCORE_SEPARATOR);
            sheet.text(row, 3 + m as u16, joined);
        }
    }

    sheet
}
