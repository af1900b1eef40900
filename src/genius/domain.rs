//! Internal domain models for artist lookups.
//!
//! These types are OUR types - they don't change when the Genius API changes.
//! API envelopes get converted into these types via the adapter.

use serde::{Serialize, Serializer};

/// Sentinel written to CSV for any value a lookup could not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// One row of collected artist statistics.
///
/// Produced once per search term and never mutated afterwards. Field order
/// is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistRecord {
    /// The name exactly as it appeared in the input list
    pub search_term: String,
    /// Artist name as Genius spells it
    #[serde(serialize_with = "or_not_available")]
    pub artist_name: Option<String>,
    /// Genius artist ID
    #[serde(serialize_with = "or_not_available")]
    pub artist_id: Option<u64>,
    /// Number of Genius users following the artist
    #[serde(serialize_with = "or_not_available")]
    pub followers_count: Option<u64>,
    /// How the lookup went (not part of the CSV)
    #[serde(skip)]
    pub outcome: LookupOutcome,
}

/// What happened when a search term was resolved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupOutcome {
    /// The artist was found and its detail fetched
    Found,
    /// The API answered but had nothing for this term
    #[default]
    NoMatch,
    /// The lookup failed (network, HTTP status, bad payload)
    Failed(String),
}

impl ArtistRecord {
    /// A row with every lookup field set to the sentinel.
    pub fn unresolved(search_term: impl Into<String>, outcome: LookupOutcome) -> Self {
        Self {
            search_term: search_term.into(),
            artist_name: None,
            artist_id: None,
            followers_count: None,
            outcome,
        }
    }

    /// Whether this row counts as a successful match.
    pub fn is_match(&self) -> bool {
        self.artist_name.is_some()
    }
}

fn or_not_available<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: std::fmt::Display,
    S: Serializer,
{
    match value {
        Some(v) => serializer.collect_str(v),
        None => serializer.serialize_str(NOT_AVAILABLE),
    }
}

/// Errors that can occur while talking to Genius
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeniusError {
    #[error("Access token is missing or empty")]
    MissingToken,

    #[error("Access token cannot be sent as a header: {0}")]
    InvalidToken(String),

    #[error("Access token rejected (HTTP {0})")]
    Unauthorized(u16),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("No search hits for '{0}'")]
    NoMatches(String),
}

impl GeniusError {
    /// Whether the error means "nothing there" rather than "something broke".
    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatches(_) | Self::NotFound(_))
    }
}

impl From<&GeniusError> for LookupOutcome {
    fn from(err: &GeniusError) -> Self {
        if err.is_no_match() {
            LookupOutcome::NoMatch
        } else {
            LookupOutcome::Failed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolved_record_has_no_fields() {
        let record = ArtistRecord::unresolved("Nobody", LookupOutcome::NoMatch);
        assert_eq!(record.search_term, "Nobody");
        assert!(record.artist_name.is_none());
        assert!(record.artist_id.is_none());
        assert!(record.followers_count.is_none());
        assert!(!record.is_match());
    }

    #[test]
    fn test_no_match_errors_map_to_no_match_outcome() {
        let outcome = LookupOutcome::from(&GeniusError::NoMatches("x".to_string()));
        assert_eq!(outcome, LookupOutcome::NoMatch);

        let outcome = LookupOutcome::from(&GeniusError::NotFound("/artists/1".to_string()));
        assert_eq!(outcome, LookupOutcome::NoMatch);
    }

    #[test]
    fn test_transport_errors_map_to_failed_outcome() {
        let outcome = LookupOutcome::from(&GeniusError::Network("connection reset".to_string()));
        match outcome {
            LookupOutcome::Failed(reason) => assert!(reason.contains("connection reset")),
            other => panic!("expected Failed, got {:?}", other),
        }
    }

    #[test]
    fn test_error_display() {
        let err = GeniusError::Http {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }
}
