use std::collections::HashMap;

use serde::{Serialize, Deserialize};

pub mod interface;
pub mod implementation;

pub use interface::*;
pub use implementation::*;

pub const DEFAULT_API_URL: &'static str = "https://api.spotify.com/v1";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub token: Option<String>,
}

pub struct SpotifyClient {
    pub api_url: String,
    pub token: Option<String>,
    fetcher: Box<dyn FetchClient + Send + Sync>,
}

impl SpotifyClient {
    /// Any configuration is accepted: a missing `api_url` falls back to
    /// [`DEFAULT_API_URL`], and a missing `token` is a valid state.
    pub fn new(config: Config, fetcher: Box<dyn FetchClient + Send + Sync>) -> Self {
        return SpotifyClient {
            api_url: config.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            token: config.token,
            fetcher,
        };
    }

    /// Issue one authenticated fetch for `url`.
    ///
    /// The URL is handed to the fetch capability verbatim, and the response
    /// comes back untouched. When a token is configured it travels in the
    /// Authorization header as `'Bearer <token>'`, single quotes included.
    pub async fn request(&self, url: &str) -> FetchResult<reqwest::Response> {
        let mut headers = HashMap::new();
        if let Some(token) = &self.token {
            headers.insert("Authorization".to_string(), format!("'Bearer {}'", token));
        }

        return self.fetcher.fetch(url.to_string(), FetchOptions { headers }).await;
    }
}
