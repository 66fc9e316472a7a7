use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beatmap {
    pub id: u64,
    pub title: String,
    pub artist: String,
    pub creator: String,
    pub difficulty_name: String,
    pub star_rating: f64,
    pub circle_size: f64,
    pub overall_difficulty: f64,
    pub approach_rate: f64,
    pub health_drain: f64,
    pub length_secs: f64,
    pub bpm: f64,
    pub max_combo: u32,
}

/// Result of a remote beatmap lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BeatmapLookup {
    Resolved(Beatmap),
    Unavailable(u64),
}

impl BeatmapLookup {
    pub fn id(&self) -> u64 {
        match self {
            Self::Resolved(m) => m.id,
            Self::Unavailable(id) => *id,
        }
    }

    pub fn title(&self) -> String {
        match self {
            Self::Resolved(m) => m.title.clone(),
            Self::Unavailable(id) => format!("Unavailable {}", id),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
