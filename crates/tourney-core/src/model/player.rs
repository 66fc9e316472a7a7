use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: u64,
    pub username: String,
    pub country: String,
}

/// Result of a remote player lookup.
///
/// A failed fetch degrades to `Unavailable` carrying the requested id; the
/// player still counts as a known participant for leaderboard filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerLookup {
    Resolved(Player),
    Unavailable(u64),
}

impl PlayerLookup {
    pub fn id(&self) -> u64 {
        match self {
            Self::Resolved(p) => p.id,
            Self::Unavailable(id) => *id,
        }
    }

    pub fn username(&self) -> String {
        match self {
            Self::Resolved(p) => p.username.clone(),
            Self::Unavailable(id) => format!("Unavailable {}", id),
        }
    }

    pub fn country(&self) -> &str {
        match self {
            Self::Resolved(p) => &p.country,
            Self::Unavailable(_) => "??",
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}
