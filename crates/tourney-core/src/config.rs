//! Session configuration for the Bancho API.
//!
//! The credential is held in one place and passed explicitly into the fetch
//! layer; the aggregator and report builder never see it.

use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://osu.ppy.sh/api";

/// Default timeout applied to each individual fetch task.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Clone)]
pub struct Session {
    pub api_key: String,
    pub base_url: String,
    pub request_timeout: Duration,
}

impl Session {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
