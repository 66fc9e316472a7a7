//! Full mappool statistics spreadsheet.

use std::io::{BufRead, Write as _};
use std::path::Path;

use anyhow::Result;
use tracing::info;

use tourney_core::Tournament;

use crate::{input, sink};

pub async fn run(tournament: &Tournament, storage: &Path, output: &Path) -> Result<()> {
    let room_ids = input::read_id_file(&storage.join("rooms.txt"))?;
    let roster = input::read_roster(&storage.join("participants.txt"))?;
    let map_ids = input::read_id_file(&storage.join("mappool.txt"))?;

    let sheets = tournament
        .compute_full_report(&room_ids, &roster.participant_ids, &map_ids, &roster.teams)
        .await?;

    // The built sheets stay in memory, so a failed save can be retried
    // without refetching or recomputing anything.
    loop {
        match sink::write_spreadsheet(output, &sheets) {
            Ok(()) => {
                info!(path = %output.display(), "spreadsheet written");
                return Ok(());
            }
            Err(e) => {
                eprintln!("Couldn't write to {}: {}", output.display(), e);
                eprint!("Make sure the file is not in use, then press Enter to retry: ");
                std::io::stderr().flush()?;
                let mut line = String::new();
                std::io::stdin().lock().read_line(&mut line)?;
            }
        }
    }
}
