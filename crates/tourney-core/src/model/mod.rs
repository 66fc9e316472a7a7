//! Domain model for tournament data.
//!
//! All records are immutable once fetched; the aggregator only ever derives
//! new structures from them. Player and beatmap lookups that failed remotely
//! are represented as `Unavailable` variants, never as nulls or sentinel-only
//! structs, so downstream code cannot forget to handle them.

mod beatmap;
mod matches;
mod mods;
mod player;

pub use beatmap::{Beatmap, BeatmapLookup};
pub use matches::{Game, Match, Score, Team};
pub use mods::Mods;
pub use player::{Player, PlayerLookup};
