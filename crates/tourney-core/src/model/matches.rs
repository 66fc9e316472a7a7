use serde::{Deserialize, Serialize};

use super::Mods;

/// One downloaded multiplayer room and the games played in it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: u64,
    pub name: String,
    pub games: Vec<Game>,
}

/// One played round within a match.
///
/// The beatmap id may not correspond to any known mappool map; aggregation
/// simply skips such games when building per-map views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub beatmap_id: u64,
    pub global_mods: Option<Mods>,
    pub scores: Vec<Score>,
}

/// One player's raw result within a game. Accuracy and grade are derived
/// on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub player_id: u64,
    pub score: u64,
    pub combo: u32,
    pub count_miss: u32,
    pub count_50: u32,
    pub count_100: u32,
    pub count_300: u32,
    pub mods: Option<Mods>,
}

/// A named group of player ids. Membership is many-to-one; a player without
/// a team is a legal state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub members: Vec<u64>,
}
