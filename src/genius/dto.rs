//! Genius API Data Transfer Objects
//!
//! These types match what the Genius API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the genius module except as the raw
//! envelope handed back by `Genius::get_artist`.
//!
//! API Reference: https://docs.genius.com
//!
//! Every payload is wrapped in `{"meta": {...}, "response": {...}}`.
//! We use `/search` to find the primary artist of the best hit and
//! `/artists/:id` for the artist detail.

use serde::{Deserialize, Serialize};

/// Status block present on every response
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Meta {
    /// Mirrors the HTTP status code
    pub status: u16,
    /// Set on error responses
    pub message: Option<String>,
}

/// `GET /search` envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub response: SearchResponse,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One search hit (songs only, in practice)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Hit {
    /// Hit kind, e.g. "song"
    #[serde(rename = "type")]
    pub hit_type: Option<String>,
    pub index: Option<String>,
    pub result: Option<HitResult>,
}

/// The song payload of a hit
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HitResult {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub full_title: Option<String>,
    pub url: Option<String>,
    pub primary_artist: Option<ArtistSummary>,
}

/// Artist as embedded in a song payload
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistSummary {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub url: Option<String>,
}

/// `GET /artists/:id` envelope
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistEnvelope {
    #[serde(default)]
    pub meta: Meta,
    #[serde(default)]
    pub response: ArtistResponse,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtistResponse {
    pub artist: Option<Artist>,
}

/// Full artist detail
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Artist {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub followers_count: Option<u64>,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub is_verified: Option<bool>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiError {
    #[serde(default)]
    pub meta: Meta,
    /// OAuth-style errors use these instead of `meta`
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl ApiError {
    /// Best human-readable message in the body, if any.
    pub fn message(&self) -> Option<String> {
        self.meta
            .message
            .clone()
            .or_else(|| self.error_description.clone())
            .or_else(|| self.error.clone())
    }
}

impl Hit {
    /// Primary artist ID of this hit, if the payload carries one
    pub fn primary_artist_id(&self) -> Option<u64> {
        self.result.as_ref()?.primary_artist.as_ref()?.id
    }
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================

#[cfg(test)]
mod contract_tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let json = r#"{
            "meta": {"status": 200},
            "response": {
                "hits": [{
                    "highlights": [],
                    "index": "song",
                    "type": "song",
                    "result": {
                        "id": 378195,
                        "title": "Paranoid Android",
                        "full_title": "Paranoid Android by Radiohead",
                        "url": "https://genius.com/Radiohead-paranoid-android-lyrics",
                        "primary_artist": {
                            "id": 604,
                            "name": "Radiohead",
                            "url": "https://genius.com/artists/Radiohead",
                            "is_verified": false
                        }
                    }
                }]
            }
        }"#;

        let envelope: SearchEnvelope =
            serde_json::from_str(json).expect("Should parse search response");

        assert_eq!(envelope.meta.status, 200);
        assert_eq!(envelope.response.hits.len(), 1);

        let hit = &envelope.response.hits[0];
        assert_eq!(hit.hit_type.as_deref(), Some("song"));
        assert_eq!(hit.primary_artist_id(), Some(604));
    }

    #[test]
    fn test_parse_empty_search() {
        let json = r#"{"meta": {"status": 200}, "response": {"hits": []}}"#;
        let envelope: SearchEnvelope = serde_json::from_str(json).unwrap();
        assert!(envelope.response.hits.is_empty());
    }

    #[test]
    fn test_hit_without_primary_artist() {
        let json = r#"{"type": "song", "result": {"id": 1, "title": "Untitled"}}"#;
        let hit: Hit = serde_json::from_str(json).unwrap();
        assert_eq!(hit.primary_artist_id(), None);
    }

    #[test]
    fn test_parse_artist_response() {
        let json = r#"{
            "meta": {"status": 200},
            "response": {
                "artist": {
                    "id": 604,
                    "name": "Radiohead",
                    "followers_count": 1873,
                    "image_url": "https://images.genius.com/radiohead.jpg",
                    "is_verified": false,
                    "url": "https://genius.com/artists/Radiohead",
                    "description": {"plain": "..."}
                }
            }
        }"#;

        let envelope: ArtistEnvelope =
            serde_json::from_str(json).expect("Should parse artist response");
        let artist = envelope.response.artist.expect("artist present");

        assert_eq!(artist.id, Some(604));
        assert_eq!(artist.name.as_deref(), Some("Radiohead"));
        assert_eq!(artist.followers_count, Some(1873));
        assert_eq!(artist.is_verified, Some(false));
    }

    #[test]
    fn test_parse_error_response() {
        let json = r#"{"meta": {"status": 404, "message": "Not found"}}"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.meta.status, 404);
        assert_eq!(error.message().as_deref(), Some("Not found"));
    }

    #[test]
    fn test_parse_oauth_error_response() {
        let json = r#"{
            "error": "invalid_token",
            "error_description": "The access token provided is expired, revoked, malformed or invalid for other reasons."
        }"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert!(error.message().unwrap().starts_with("The access token"));
    }
}
