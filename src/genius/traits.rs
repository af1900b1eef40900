//! Trait definition for the Genius API transport.
//!
//! The [`Genius`](super::Genius) facade is generic over this trait so the
//! lookup and batch logic can run against a mock in tests.

use async_trait::async_trait;

use super::domain::GeniusError;
use super::dto;

/// Raw Genius endpoints used by the lookups.
#[async_trait]
pub trait GeniusApi: Send + Sync {
    /// `GET /search`, returning the hits array.
    async fn search_hits(&self, query: &str, per_page: u32) -> Result<Vec<dto::Hit>, GeniusError>;

    /// `GET /artists/:id`, returning the whole envelope.
    async fn artist_by_id(&self, artist_id: u64) -> Result<dto::ArtistEnvelope, GeniusError>;
}

#[async_trait]
impl GeniusApi for super::client::GeniusClient {
    async fn search_hits(&self, query: &str, per_page: u32) -> Result<Vec<dto::Hit>, GeniusError> {
        self.search(query, per_page).await
    }

    async fn artist_by_id(&self, artist_id: u64) -> Result<dto::ArtistEnvelope, GeniusError> {
        self.artist(artist_id).await
    }
}
