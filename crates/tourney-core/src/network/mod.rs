//! Bancho v1 API access: HTTP client, endpoint wrappers, and the
//! fan-out/fan-in fetch layer.

mod api;
mod client;
mod fetch;

pub use api::BanchoApi;
pub use client::HttpClient;
pub use fetch::{FetchedData, fetch_all, fetch_matches};
