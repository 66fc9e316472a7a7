//! Lightweight per-map score count and average report.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use tourney_core::Tournament;

use crate::input;

pub async fn run(tournament: &Tournament, storage: &Path) -> Result<()> {
    let room_ids = input::read_id_file(&storage.join("rooms.txt"))?;
    let roster = input::read_roster(&storage.join("participants.txt"))?;

    let averages = tournament
        .compute_map_averages(&room_ids, &roster.participant_ids)
        .await?;

    let mut out = String::new();
    for (map_id, average) in &averages {
        writeln!(out, "{} has {} scores", map_id, average.count)?;
    }
    out.push('\n');
    for (map_id, average) in &averages {
        writeln!(out, "{}\t{}", map_id, average.average)?;
    }

    let path = storage.join("averages.txt");
    fs::write(&path, &out)?;
    print!("{}", out);
    info!(path = %path.display(), "averages written");
    Ok(())
}
