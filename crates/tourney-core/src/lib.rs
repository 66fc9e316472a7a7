pub mod aggregate;
pub mod config;
pub mod error;
pub mod model;
pub mod network;
pub mod report;
pub mod score;
pub mod tournament;

pub use aggregate::{
    PlayerStanding, ScoreEntry, build_map_leaderboard, owning_match, pick_count,
    player_scores_on_map, rank_players, team_of, total_score,
};
pub use config::Session;
pub use error::{Error, Result};
pub use model::{Beatmap, BeatmapLookup, Game, Match, Mods, Player, PlayerLookup, Score, Team};
pub use network::{BanchoApi, FetchedData, HttpClient, fetch_all, fetch_matches};
pub use report::{CellSpec, CellStyle, CellValue, SheetSpec, build_report};
pub use score::Grade;
pub use tournament::{MapAverage, Tournament};
