//! Fan-out/fan-in download of matches, players and maps.
//!
//! One task per identifier, each with its own timeout; a single barrier
//! joins them all before aggregation starts. Player and map failures degrade
//! to placeholder records, a match failure aborts the whole run.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::model::{BeatmapLookup, Match, PlayerLookup};
use crate::network::BanchoApi;

/// Ceiling per fetch task, above the HTTP client's own request timeout.
/// A task that hits it fails alone; sibling tasks keep running.
const TASK_TIMEOUT: Duration = Duration::from_secs(60);

/// Fully materialized inputs for the aggregator, in input-id order.
#[derive(Debug, Clone)]
pub struct FetchedData {
    pub matches: Vec<Match>,
    pub players: Vec<PlayerLookup>,
    pub maps: Vec<BeatmapLookup>,
}

/// Download everything the full report needs, concurrently.
pub async fn fetch_all(
    api: &Arc<BanchoApi>,
    room_ids: &[u64],
    participant_ids: &[u64],
    map_ids: &[u64],
) -> Result<FetchedData> {
    info!(
        rooms = room_ids.len(),
        players = participant_ids.len(),
        maps = map_ids.len(),
        "downloading matches, players and maps"
    );

    let (matches, players, maps) = tokio::join!(
        fetch_matches(api, room_ids),
        fetch_players(api, participant_ids),
        fetch_maps(api, map_ids),
    );
    let data = FetchedData {
        matches: matches?,
        players: players?,
        maps: maps?,
    };

    info!("download complete");
    Ok(data)
}

/// Download all rooms. Any single failure is fatal: there is no meaningful
/// placeholder for a match, so the error names the room and aborts.
pub async fn fetch_matches(api: &Arc<BanchoApi>, room_ids: &[u64]) -> Result<Vec<Match>> {
    let mut tasks = JoinSet::new();
    for (idx, &id) in room_ids.iter().enumerate() {
        let api = Arc::clone(api);
        tasks.spawn(async move {
            let result = match timeout(TASK_TIMEOUT, api.get_match(id)).await {
                Ok(result) => result,
                Err(_) => Err(Error::FetchTimeout { what: "match", id }),
            };
            (idx, id, result)
        });
    }

    let mut matches: Vec<Option<Match>> = room_ids.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (idx, id, result) =
            joined.map_err(|e| Error::Network(format!("fetch task failed: {}", e)))?;
        match result {
            Ok(m) => {
                info!(room_id = id, name = %m.name, games = m.games.len(), "match downloaded");
                matches[idx] = Some(m);
            }
            Err(e) => {
                return Err(Error::MatchFetch {
                    room_id: id,
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(matches
        .into_iter()
        .map(|m| m.expect("every join fills its input slot"))
        .collect())
}

async fn fetch_players(api: &Arc<BanchoApi>, participant_ids: &[u64]) -> Result<Vec<PlayerLookup>> {
    let mut tasks = JoinSet::new();
    for (idx, &id) in participant_ids.iter().enumerate() {
        let api = Arc::clone(api);
        tasks.spawn(async move {
            let result = match timeout(TASK_TIMEOUT, api.get_user(id)).await {
                Ok(result) => result,
                Err(_) => Err(Error::FetchTimeout { what: "player", id }),
            };
            (idx, id, result)
        });
    }

    let mut players: Vec<Option<PlayerLookup>> = participant_ids.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (idx, id, result) =
            joined.map_err(|e| Error::Network(format!("fetch task failed: {}", e)))?;
        players[idx] = Some(match result {
            Ok(p) => PlayerLookup::Resolved(p),
            Err(e) => {
                warn!(player_id = id, "player lookup failed, using placeholder: {}", e);
                PlayerLookup::Unavailable(id)
            }
        });
    }

    Ok(players
        .into_iter()
        .map(|p| p.expect("every join fills its input slot"))
        .collect())
}

async fn fetch_maps(api: &Arc<BanchoApi>, map_ids: &[u64]) -> Result<Vec<BeatmapLookup>> {
    let mut tasks = JoinSet::new();
    for (idx, &id) in map_ids.iter().enumerate() {
        let api = Arc::clone(api);
        tasks.spawn(async move {
            let result = match timeout(TASK_TIMEOUT, api.get_beatmap(id)).await {
                Ok(result) => result,
                Err(_) => Err(Error::FetchTimeout { what: "beatmap", id }),
            };
            (idx, id, result)
        });
    }

    let mut maps: Vec<Option<BeatmapLookup>> = map_ids.iter().map(|_| None).collect();
    while let Some(joined) = tasks.join_next().await {
        let (idx, id, result) =
            joined.map_err(|e| Error::Network(format!("fetch task failed: {}", e)))?;
        maps[idx] = Some(match result {
            Ok(m) => BeatmapLookup::Resolved(m),
            Err(e) => {
                warn!(map_id = id, "beatmap lookup failed, using placeholder: {}", e);
                BeatmapLookup::Unavailable(id)
            }
        });
    }

    Ok(maps
        .into_iter()
        .map(|m| m.expect("every join fills its input slot"))
        .collect())
}
