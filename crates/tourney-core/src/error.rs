use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Score for player {player_id} has no judged hits")]
    InvalidScore { player_id: u64 },

    #[error("Game on beatmap {beatmap_id} has no owning match")]
    OrphanGame { beatmap_id: u64 },

    #[error("Failed to fetch match {room_id}: {message}")]
    MatchFetch { room_id: u64, message: String },

    #[error("Timed out fetching {what} {id}")]
    FetchTimeout { what: &'static str, id: u64 },

    #[error("Malformed {endpoint} response: {message}")]
    MalformedResponse {
        endpoint: &'static str,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("{0}")]
    Http(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        let message = if e.is_timeout() {
            format!("Request timed out: {}", e)
        } else if e.is_connect() {
            format!("Connection failed: {}", e)
        } else if e.is_request() {
            format!("Request error: {}", e)
        } else if let Some(status) = e.status() {
            format!("HTTP {} error: {}", status.as_u16(), e)
        } else {
            format!("HTTP error: {}", e)
        };
        Error::Http(message)
    }
}
