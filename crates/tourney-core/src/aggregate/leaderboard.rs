use std::collections::HashMap;

use tracing::debug;

use crate::error::Result;
use crate::model::{Match, Mods, PlayerLookup, Team};
use crate::score::Grade;

use super::standings::{owning_match, team_of};

/// One ranked row of a per-map leaderboard.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreEntry {
    /// 1-based dense tie rank: equal raw scores share the predecessor's
    /// position, the next distinct score takes its row index.
    pub position: usize,
    pub player_id: u64,
    pub username: String,
    pub country: String,
    pub team: Option<String>,
    /// `None` when the score had no judged hits.
    pub grade: Option<Grade>,
    pub score: u64,
    pub combo: u32,
    /// `None` when the score had no judged hits.
    pub accuracy: Option<f64>,
    /// Game-wide mods unioned with the score's personal mods.
    pub mods: Mods,
    pub match_id: u64,
    pub match_name: String,
}

/// Collect every score on `map_id` across all matches into a ranked
/// leaderboard.
///
/// Scores from players outside the known participant set are silently
/// excluded. The sort is stable and descending by raw score, so equal scores
/// keep their original encounter order. Building the same leaderboard twice
/// from the same inputs yields identical output.
pub fn build_map_leaderboard(
    matches: &[Match],
    players: &[PlayerLookup],
    teams: &[Team],
    map_id: u64,
) -> Result<Vec<ScoreEntry>> {
    let known: HashMap<u64, &PlayerLookup> = players.iter().map(|p| (p.id(), p)).collect();

    let mut collected = Vec::new();
    for m in matches {
        for game in m.games.iter().filter(|g| g.beatmap_id == map_id) {
            for score in &game.scores {
                match known.get(&score.player_id) {
                    Some(player) => collected.push((score, game, *player)),
                    None => debug!(
                        player_id = score.player_id,
                        map_id, "excluding score from unknown player"
                    ),
                }
            }
        }
    }

    // Stable sort: ties keep encounter order.
    collected.sort_by(|(a, _, _), (b, _, _)| b.score.cmp(&a.score));

    let mut entries: Vec<ScoreEntry> = Vec::with_capacity(collected.len());
    for (row, (score, game, player)) in collected.into_iter().enumerate() {
        let owner = owning_match(matches, game)?;

        let position = match entries.last() {
            Some(prev) if prev.score == score.score => prev.position,
            _ => row + 1,
        };

        let accuracy = match score.accuracy() {
            Ok(acc) => Some(acc),
            Err(e) => {
                debug!(player_id = score.player_id, map_id, "no accuracy: {}", e);
                None
            }
        };
        let grade = score.grade().ok();

        entries.push(ScoreEntry {
            position,
            player_id: score.player_id,
            username: player.username(),
            country: player.country().to_string(),
            team: team_of(teams, score.player_id).map(|t| t.name.clone()),
            grade,
            score: score.score,
            combo: score.combo,
            accuracy,
            mods: Mods::combine(game.global_mods, score.mods),
            match_id: owner.id,
            match_name: owner.name.clone(),
        });
    }

    Ok(entries)
}
