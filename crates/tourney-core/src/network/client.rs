use reqwest::Client;
use serde_json::Value as JsonValue;

use crate::config::Session;
use crate::error::{Error, Result};

/// Thin reqwest wrapper that appends the API key to every request.
///
/// The credential lives here and in the [`Session`] it was built from;
/// nothing downstream of the fetch layer ever sees it.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl HttpClient {
    pub fn new(session: &Session) -> Result<Self> {
        let client = Client::builder()
            .timeout(session.request_timeout)
            .build()
            .map_err(|e| Error::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: session.base_url.clone(),
            api_key: session.api_key.clone(),
        })
    }

    pub async fn get_json(&self, endpoint: &str, params: &[(&str, String)]) -> Result<JsonValue> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let mut query: Vec<(&str, &str)> = vec![("k", self.api_key.as_str())];
        query.extend(params.iter().map(|(k, v)| (*k, v.as_str())));

        let response = self
            .client
            .get(&url)
            .query(&query)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }
}
