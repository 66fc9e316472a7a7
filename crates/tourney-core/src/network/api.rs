//! Bancho v1 endpoint wrappers and their wire types.
//!
//! The v1 API serializes most numeric fields as JSON strings, so the wire
//! types accept either form before conversion into the domain model.

use serde::Deserialize;

use crate::config::Session;
use crate::error::{Error, Result};
use crate::model::{Beatmap, Game, Match, Mods, Player, Score};
use crate::network::HttpClient;

pub struct BanchoApi {
    client: HttpClient,
}

impl BanchoApi {
    pub fn new(session: &Session) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new(session)?,
        })
    }

    /// Download one multiplayer room with all its games and scores.
    pub async fn get_match(&self, room_id: u64) -> Result<Match> {
        let value = self
            .client
            .get_json("get_match", &[("mp", room_id.to_string())])
            .await?;
        let response: MatchResponse = serde_json::from_value(value)?;

        Ok(Match {
            id: response.info.match_id,
            name: response.info.name,
            games: response.games.into_iter().map(Game::from).collect(),
        })
    }

    /// Look up one player. The endpoint answers with a one-element array;
    /// an empty array means the id is unknown.
    pub async fn get_user(&self, user_id: u64) -> Result<Player> {
        let value = self
            .client
            .get_json("get_user", &[("u", user_id.to_string())])
            .await?;
        let mut users: Vec<UserDto> = serde_json::from_value(value)?;

        if users.is_empty() {
            return Err(Error::MalformedResponse {
                endpoint: "get_user",
                message: format!("no user with id {}", user_id),
            });
        }
        Ok(users.remove(0).into())
    }

    /// Look up one beatmap by difficulty id.
    pub async fn get_beatmap(&self, map_id: u64) -> Result<Beatmap> {
        let value = self
            .client
            .get_json("get_beatmaps", &[("b", map_id.to_string())])
            .await?;
        let mut maps: Vec<BeatmapDto> = serde_json::from_value(value)?;

        if maps.is_empty() {
            return Err(Error::MalformedResponse {
                endpoint: "get_beatmaps",
                message: format!("no beatmap with id {}", map_id),
            });
        }
        Ok(maps.remove(0).into())
    }
}

#[derive(Debug, Deserialize)]
struct MatchResponse {
    #[serde(rename = "match")]
    info: MatchInfoDto,
    #[serde(default)]
    games: Vec<GameDto>,
}

#[derive(Debug, Deserialize)]
struct MatchInfoDto {
    #[serde(deserialize_with = "flexible::u64")]
    match_id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct GameDto {
    #[serde(deserialize_with = "flexible::u64")]
    beatmap_id: u64,
    #[serde(default, deserialize_with = "flexible::opt_u32")]
    global_mods: Option<u32>,
    #[serde(default)]
    scores: Vec<ScoreDto>,
}

#[derive(Debug, Deserialize)]
struct ScoreDto {
    #[serde(deserialize_with = "flexible::u64")]
    user_id: u64,
    #[serde(deserialize_with = "flexible::u64")]
    score: u64,
    #[serde(deserialize_with = "flexible::u32")]
    maxcombo: u32,
    #[serde(deserialize_with = "flexible::u32")]
    count50: u32,
    #[serde(deserialize_with = "flexible::u32")]
    count100: u32,
    #[serde(deserialize_with = "flexible::u32")]
    count300: u32,
    #[serde(deserialize_with = "flexible::u32")]
    countmiss: u32,
    #[serde(default, deserialize_with = "flexible::opt_u32")]
    enabled_mods: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct UserDto {
    #[serde(deserialize_with = "flexible::u64")]
    user_id: u64,
    username: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct BeatmapDto {
    #[serde(deserialize_with = "flexible::u64")]
    beatmap_id: u64,
    title: String,
    artist: String,
    creator: String,
    #[serde(rename = "version")]
    difficulty_name: String,
    #[serde(deserialize_with = "flexible::f64")]
    difficultyrating: f64,
    #[serde(deserialize_with = "flexible::f64")]
    diff_size: f64,
    #[serde(deserialize_with = "flexible::f64")]
    diff_overall: f64,
    #[serde(deserialize_with = "flexible::f64")]
    diff_approach: f64,
    #[serde(deserialize_with = "flexible::f64")]
    diff_drain: f64,
    #[serde(deserialize_with = "flexible::f64")]
    hit_length: f64,
    #[serde(deserialize_with = "flexible::f64")]
    bpm: f64,
    #[serde(deserialize_with = "flexible::u32")]
    max_combo: u32,
}

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        Self {
            beatmap_id: dto.beatmap_id,
            global_mods: dto.global_mods.map(Mods::from_bits_lossy),
            scores: dto.scores.into_iter().map(Score::from).collect(),
        }
    }
}

impl From<ScoreDto> for Score {
    fn from(dto: ScoreDto) -> Self {
        Self {
            player_id: dto.user_id,
            score: dto.score,
            combo: dto.maxcombo,
            count_miss: dto.countmiss,
            count_50: dto.count50,
            count_100: dto.count100,
            count_300: dto.count300,
            mods: dto.enabled_mods.map(Mods::from_bits_lossy),
        }
    }
}

impl From<UserDto> for Player {
    fn from(dto: UserDto) -> Self {
        Self {
            id: dto.user_id,
            username: dto.username,
            country: dto.country,
        }
    }
}

impl From<BeatmapDto> for Beatmap {
    fn from(dto: BeatmapDto) -> Self {
        Self {
            id: dto.beatmap_id,
            title: dto.title,
            artist: dto.artist,
            creator: dto.creator,
            difficulty_name: dto.difficulty_name,
            star_rating: dto.difficultyrating,
            circle_size: dto.diff_size,
            overall_difficulty: dto.diff_overall,
            approach_rate: dto.diff_approach,
            health_drain: dto.diff_drain,
            length_secs: dto.hit_length,
            bpm: dto.bpm,
            max_combo: dto.max_combo,
        }
    }
}

/// Deserializers accepting both native numbers and numeric strings.
mod flexible {
    use serde::de::{Deserializer, Error as DeError};
    use serde::Deserialize;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInt {
        Num(i64),
        Text(String),
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawFloat {
        Num(f64),
        Text(String),
    }

    pub fn u64<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        match RawInt::deserialize(d)? {
            RawInt::Num(n) => u64::try_from(n).map_err(DeError::custom),
            RawInt::Text(s) => s.trim().parse().map_err(DeError::custom),
        }
    }

    pub fn u32<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        match RawInt::deserialize(d)? {
            RawInt::Num(n) => u32::try_from(n).map_err(DeError::custom),
            RawInt::Text(s) => s.trim().parse().map_err(DeError::custom),
        }
    }

    pub fn f64<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        match RawFloat::deserialize(d)? {
            RawFloat::Num(n) => Ok(n),
            RawFloat::Text(s) => s.trim().parse().map_err(DeError::custom),
        }
    }

    pub fn opt_u32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        let value = Option::<RawInt>::deserialize(d)?;
        value
            .map(|raw| match raw {
                RawInt::Num(n) => u32::try_from(n).map_err(DeError::custom),
                RawInt::Text(s) => s.trim().parse().map_err(DeError::custom),
            })
            .transpose()
    }
}
