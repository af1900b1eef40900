//! Adapter layer: Convert Genius DTOs to domain models
//!
//! This is the ONLY place where DTO types are converted to domain types.

use super::domain::{ArtistRecord, GeniusError, LookupOutcome};
use super::dto;

/// Build the CSV row for a search term from a lookup result.
///
/// A missing `response.artist` or any missing field falls back to `None`,
/// which serializes as the "N/A" sentinel.
pub fn to_record(
    search_term: &str,
    lookup: Result<dto::ArtistEnvelope, GeniusError>,
) -> ArtistRecord {
    match lookup {
        Ok(envelope) => match envelope.response.artist {
            Some(artist) => ArtistRecord {
                search_term: search_term.to_string(),
                artist_name: artist.name,
                artist_id: artist.id,
                followers_count: artist.followers_count,
                outcome: LookupOutcome::Found,
            },
            None => ArtistRecord::unresolved(search_term, LookupOutcome::NoMatch),
        },
        Err(e) => ArtistRecord::unresolved(search_term, LookupOutcome::from(&e)),
    }
}

/// Pick the primary artist ID off the first hit.
pub fn first_primary_artist_id(search_term: &str, hits: &[dto::Hit]) -> Result<u64, GeniusError> {
    hits.first()
        .and_then(dto::Hit::primary_artist_id)
        .ok_or_else(|| GeniusError::NoMatches(search_term.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{artist_envelope, song_hit};

    #[test]
    fn test_found_artist_fills_all_fields() {
        let record = to_record("radiohead", Ok(artist_envelope(604, "Radiohead", Some(1873))));

        assert_eq!(record.search_term, "radiohead");
        assert_eq!(record.artist_name.as_deref(), Some("Radiohead"));
        assert_eq!(record.artist_id, Some(604));
        assert_eq!(record.followers_count, Some(1873));
        assert_eq!(record.outcome, LookupOutcome::Found);
    }

    #[test]
    fn test_missing_followers_falls_back() {
        let record = to_record("Tycho", Ok(artist_envelope(9, "Tycho", None)));
        assert!(record.is_match());
        assert_eq!(record.followers_count, None);
    }

    #[test]
    fn test_empty_envelope_is_no_match() {
        let record = to_record("Seal", Ok(dto::ArtistEnvelope::default()));
        assert!(!record.is_match());
        assert_eq!(record.outcome, LookupOutcome::NoMatch);
    }

    #[test]
    fn test_error_is_recorded_on_the_row() {
        let record = to_record("U2", Err(GeniusError::RateLimited));
        assert!(!record.is_match());
        assert!(matches!(record.outcome, LookupOutcome::Failed(_)));
    }

    #[test]
    fn test_first_primary_artist_id_uses_first_hit_only() {
        let hits = vec![song_hit(1, "First"), song_hit(2, "Second")];
        assert_eq!(first_primary_artist_id("q", &hits), Ok(1));
    }

    #[test]
    fn test_first_primary_artist_id_no_hits() {
        assert_eq!(
            first_primary_artist_id("nobody", &[]),
            Err(GeniusError::NoMatches("nobody".to_string()))
        );
    }
}
