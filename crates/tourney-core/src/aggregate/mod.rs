//! Aggregation of raw match data into leaderboards and standings.
//!
//! Everything here is pure and synchronous: inputs are fully materialized,
//! immutable snapshots produced by the fetch layer, so no locking is needed.

mod leaderboard;
mod standings;

pub use leaderboard::{ScoreEntry, build_map_leaderboard};
pub use standings::{
    PlayerStanding, collect_map_scores, owning_match, pick_count, player_scores_on_map,
    rank_players, team_of, total_score,
};
