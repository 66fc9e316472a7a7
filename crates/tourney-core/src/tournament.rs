//! Entry operations combining the fetch layer with the pure aggregation.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::info;

use crate::aggregate::collect_map_scores;
use crate::config::Session;
use crate::error::Result;
use crate::model::Team;
use crate::network::{BanchoApi, fetch_all, fetch_matches};
use crate::report::{SheetSpec, build_report};

/// Score count and mean raw score for one map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapAverage {
    pub count: usize,
    pub average: f64,
}

pub struct Tournament {
    api: Arc<BanchoApi>,
}

impl Tournament {
    pub fn new(session: Session) -> Result<Self> {
        Ok(Self {
            api: Arc::new(BanchoApi::new(&session)?),
        })
    }

    /// Lightweight report: per-map score count and average across all rooms,
    /// restricted to the given participants. Keyed by beatmap id.
    ///
    /// A map picked without any participant score keeps its entry with a
    /// count of zero and an average of zero.
    pub async fn compute_map_averages(
        &self,
        room_ids: &[u64],
        participant_ids: &[u64],
    ) -> Result<BTreeMap<u64, MapAverage>> {
        let matches = fetch_matches(&self.api, room_ids).await?;

        let averages = collect_map_scores(&matches, participant_ids)
            .into_iter()
            .map(|(map_id, scores)| {
                let count = scores.len();
                let average = if count == 0 {
                    0.0
                } else {
                    scores.iter().sum::<u64>() as f64 / count as f64
                };
                (map_id, MapAverage { count, average })
            })
            .collect();
        Ok(averages)
    }

    /// Full mappool statistics: the player summary sheet plus one sheet per
    /// mappool map, ready for any spreadsheet sink.
    pub async fn compute_full_report(
        &self,
        room_ids: &[u64],
        participant_ids: &[u64],
        map_ids: &[u64],
        teams: &[Team],
    ) -> Result<Vec<SheetSpec>> {
        let data = fetch_all(&self.api, room_ids, participant_ids, map_ids).await?;

        info!(sheets = data.maps.len() + 1, "compiling report");
        build_report(&data.maps, &data.matches, &data.players, teams)
    }
}
