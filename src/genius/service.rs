//! Genius facade - the artist lookups the collectors call
//!
//! Two layers:
//! - [`Genius::lookup_artist`] returns a typed `Result`, so callers can tell
//!   "no such artist" from "the request failed".
//! - [`Genius::search`], [`Genius::get_artist`] and [`Genius::get_artists`]
//!   never fail. Errors are logged and turned into empty results or "N/A"
//!   rows, and the outcome stays on each [`ArtistRecord`].

use std::path::Path;
use std::time::Duration;

use super::adapter;
use super::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, GeniusClient};
use super::domain::{ArtistRecord, GeniusError, LookupOutcome};
use super::dto;
use super::traits::GeniusApi;
use crate::credentials::TokenSource;

/// Hits requested per search unless told otherwise
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Pause between consecutive lookups in a batch
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Tunables for the facade and the HTTP client it builds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeniusSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub per_page: u32,
    pub request_delay: Duration,
}

impl Default for GeniusSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            per_page: DEFAULT_PER_PAGE,
            request_delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

/// Genius API facade
pub struct Genius<A: GeniusApi = GeniusClient> {
    api: A,
    settings: GeniusSettings,
}

impl Genius<GeniusClient> {
    /// Client for the production API with default settings.
    pub fn new(access_token: impl Into<String>) -> Result<Self, GeniusError> {
        Self::with_settings(access_token, GeniusSettings::default())
    }

    pub fn with_settings(
        access_token: impl Into<String>,
        settings: GeniusSettings,
    ) -> Result<Self, GeniusError> {
        let api = GeniusClient::with_options(access_token, &settings.base_url, settings.timeout)?;
        Ok(Self { api, settings })
    }

    /// Read `ACCESS_TOKEN` from an env file and build a client.
    pub fn from_env_file(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        Self::from_source(
            &TokenSource::EnvFile(path.as_ref().to_path_buf()),
            GeniusSettings::default(),
        )
    }

    /// Resolve a token source and build a client.
    pub fn from_source(source: &TokenSource, settings: GeniusSettings) -> crate::error::Result<Self> {
        let token = source.resolve()?;
        Ok(Self::with_settings(token, settings)?)
    }

    /// The saved access token
    pub fn access_token(&self) -> &str {
        self.api.access_token()
    }
}

impl<A: GeniusApi> Genius<A> {
    /// Wrap any transport, e.g. a mock.
    pub fn with_api(api: A, settings: GeniusSettings) -> Self {
        Self { api, settings }
    }

    /// Search songs. Returns no hits if the request fails.
    pub async fn search(&self, query: &str, per_page: u32) -> Vec<dto::Hit> {
        match self.api.search_hits(query, per_page).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(query, error = %e, "Search failed");
                Vec::new()
            }
        }
    }

    /// Resolve a search term to the primary artist of its first hit and
    /// fetch that artist's detail envelope.
    pub async fn lookup_artist(&self, search_term: &str) -> Result<dto::ArtistEnvelope, GeniusError> {
        let hits = self
            .api
            .search_hits(search_term, self.settings.per_page)
            .await?;
        let artist_id = adapter::first_primary_artist_id(search_term, &hits)?;
        tracing::debug!(search_term, artist_id, "Resolved primary artist");
        self.api.artist_by_id(artist_id).await
    }

    /// Artist detail envelope for a search term, or `None` when there is no
    /// usable hit or the lookup failed.
    pub async fn get_artist(&self, search_term: &str) -> Option<dto::ArtistEnvelope> {
        match self.lookup_artist(search_term).await {
            Ok(envelope) => Some(envelope),
            Err(e) if e.is_no_match() => {
                tracing::info!(search_term, "No artist found");
                None
            }
            Err(e) => {
                tracing::warn!(search_term, error = %e, "Artist lookup failed");
                None
            }
        }
    }

    /// One row per search term, in input order.
    ///
    /// Lookups run one after another with `request_delay` between them.
    pub async fn get_artists<S: AsRef<str>>(&self, search_terms: &[S]) -> Vec<ArtistRecord> {
        let mut records = Vec::with_capacity(search_terms.len());

        for (i, term) in search_terms.iter().enumerate() {
            let term = term.as_ref();
            let record = adapter::to_record(term, self.lookup_artist(term).await);

            if let LookupOutcome::Failed(reason) = &record.outcome {
                tracing::warn!(search_term = term, reason = %reason, "Lookup failed, writing N/A");
            }
            records.push(record);

            if i + 1 < search_terms.len() && !self.settings.request_delay.is_zero() {
                tokio::time::sleep(self.settings.request_delay).await;
            }
        }

        records
    }
}
