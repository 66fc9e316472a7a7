use std::collections::{BTreeMap, HashSet};

use crate::error::{Error, Result};
use crate::model::{Game, Match, PlayerLookup, Team};

/// Sum of raw score values for one player across every game of every match.
pub fn total_score(matches: &[Match], player_id: u64) -> u64 {
    matches
        .iter()
        .flat_map(|m| &m.games)
        .flat_map(|g| &g.scores)
        .filter(|s| s.player_id == player_id)
        .map(|s| s.score)
        .sum()
}

/// Every raw score the player posted on the given map, in encounter order.
/// A map replayed across matches reports all occurrences, not just the best.
pub fn player_scores_on_map(matches: &[Match], player_id: u64, map_id: u64) -> Vec<u64> {
    matches
        .iter()
        .flat_map(|m| &m.games)
        .filter(|g| g.beatmap_id == map_id)
        .flat_map(|g| &g.scores)
        .filter(|s| s.player_id == player_id)
        .map(|s| s.score)
        .collect()
}

/// How many times the map was picked: distinct games on it, regardless of
/// how many scores each game holds.
pub fn pick_count(matches: &[Match], map_id: u64) -> usize {
    matches
        .iter()
        .flat_map(|m| &m.games)
        .filter(|g| g.beatmap_id == map_id)
        .count()
}

/// Reverse lookup from a game to its containing match, by identity.
///
/// Exactly one match owns any game the aggregator sees; failure here means
/// the inputs are internally inconsistent and the run must abort.
pub fn owning_match<'a>(matches: &'a [Match], game: &Game) -> Result<&'a Match> {
    matches
        .iter()
        .find(|m| m.games.iter().any(|g| std::ptr::eq(g, game)))
        .ok_or(Error::OrphanGame {
            beatmap_id: game.beatmap_id,
        })
}

/// First team (in input order) containing the player, if any.
pub fn team_of(teams: &[Team], player_id: u64) -> Option<&Team> {
    teams.iter().find(|t| t.members.contains(&player_id))
}

/// One row of the event-wide player summary.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStanding {
    /// 1-based dense tie rank over total score.
    pub position: usize,
    pub player_id: u64,
    pub username: String,
    pub total: u64,
}

/// Players ordered descending by total score.
///
/// Ties keep the input order of the player list; this stable-sort behavior
/// is a deliberate contract, not an accident of the sort implementation.
pub fn rank_players(matches: &[Match], players: &[PlayerLookup]) -> Vec<PlayerStanding> {
    let mut totals: Vec<(u64, String, u64)> = players
        .iter()
        .map(|p| (p.id(), p.username(), total_score(matches, p.id())))
        .collect();
    totals.sort_by(|a, b| b.2.cmp(&a.2));

    let mut standings: Vec<PlayerStanding> = Vec::with_capacity(totals.len());
    for (row, (player_id, username, total)) in totals.into_iter().enumerate() {
        let position = match standings.last() {
            Some(prev) if prev.total == total => prev.position,
            _ => row + 1,
        };
        standings.push(PlayerStanding {
            position,
            player_id,
            username,
            total,
        });
    }
    standings
}

/// Raw score values per map across all matches, restricted to the given
/// participants. Keyed by beatmap id for deterministic iteration.
pub fn collect_map_scores(matches: &[Match], participant_ids: &[u64]) -> BTreeMap<u64, Vec<u64>> {
    let participants: HashSet<u64> = participant_ids.iter().copied().collect();

    let mut map_scores: BTreeMap<u64, Vec<u64>> = BTreeMap::new();
    for game in matches.iter().flat_map(|m| &m.games) {
        let scores = map_scores.entry(game.beatmap_id).or_default();
        scores.extend(
            game.scores
                .iter()
                .filter(|s| participants.contains(&s.player_id))
                .map(|s| s.score),
        );
    }
    map_scores
}
