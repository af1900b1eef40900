//! Genius HTTP client
//!
//! Handles communication with the Genius REST API.
//! See: https://docs.genius.com
//!
//! Every request carries the bearer token as a default header, so one client
//! is one authenticated session. Parallel workers each build their own.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use super::domain::GeniusError;
use super::dto;

/// Production API root
pub const DEFAULT_BASE_URL: &str = "https://api.genius.com";

/// Per-request timeout when none is configured
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Genius API client
#[derive(Debug, Clone)]
pub struct GeniusClient {
    access_token: String,
    http_client: reqwest::Client,
    base_url: String,
}

impl GeniusClient {
    /// Create a client against the production API.
    ///
    /// Fails with [`GeniusError::MissingToken`] if the token is empty.
    pub fn new(access_token: impl Into<String>) -> Result<Self, GeniusError> {
        Self::with_options(access_token, DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client with an explicit base URL and request timeout.
    pub fn with_options(
        access_token: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GeniusError> {
        let access_token = access_token.into().trim().to_string();
        if access_token.is_empty() {
            return Err(GeniusError::MissingToken);
        }

        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", access_token))
            .map_err(|e| GeniusError::InvalidToken(e.to_string()))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .gzip(true)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| GeniusError::Network(e.to_string()))?;

        Ok(Self {
            access_token,
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The token this session authenticates with
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Search songs and return the raw hits
    pub async fn search(&self, query: &str, per_page: u32) -> Result<Vec<dto::Hit>, GeniusError> {
        let url = format!(
            "{}/search?q={}&per_page={}",
            self.base_url,
            urlencoding::encode(query),
            per_page
        );
        let envelope: dto::SearchEnvelope = self.get_json(&url).await?;
        Ok(envelope.response.hits)
    }

    /// Fetch artist detail by Genius artist ID
    pub async fn artist(&self, artist_id: u64) -> Result<dto::ArtistEnvelope, GeniusError> {
        let url = format!("{}/artists/{}", self.base_url, artist_id);
        self.get_json(&url).await
    }

    /// Send an authenticated GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GeniusError> {
        tracing::debug!(url, "GET");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| GeniusError::Network(e.to_string()))?;

        let status = response.status();

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(GeniusError::Unauthorized(status.as_u16()));
            }
            StatusCode::NOT_FOUND => return Err(GeniusError::NotFound(url.to_string())),
            StatusCode::TOO_MANY_REQUESTS => return Err(GeniusError::RateLimited),
            _ => {}
        }

        if !status.is_success() {
            let message = match response.json::<dto::ApiError>().await {
                Ok(error) => error.message(),
                Err(_) => None,
            };
            return Err(GeniusError::Http {
                status: status.as_u16(),
                message: message
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown").to_string()),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GeniusError::Parse(e.to_string()))
    }
}
