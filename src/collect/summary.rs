//! Run statistics for a collection.

use std::time::Duration;

use crate::genius::{ArtistRecord, LookupOutcome};

/// Rough per-artist cost of a serial run, used for the speedup estimate
const SERIAL_SECONDS_PER_ARTIST: f64 = 0.2;

/// Counts and timings for one collection run
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSummary {
    /// Names read from the input list
    pub artists: usize,
    /// Rows actually collected (parallel runs can drop a failed batch)
    pub rows: usize,
    pub successful: usize,
    pub no_match: usize,
    pub errors: usize,
    pub duration: Duration,
}

impl CollectionSummary {
    pub fn from_records(artists: usize, records: &[ArtistRecord], duration: Duration) -> Self {
        let successful = records.iter().filter(|r| r.is_match()).count();
        let errors = records
            .iter()
            .filter(|r| matches!(r.outcome, LookupOutcome::Failed(_)))
            .count();

        Self {
            artists,
            rows: records.len(),
            successful,
            no_match: records.len() - successful - errors,
            errors,
            duration,
        }
    }

    /// Rows without a match, whatever the reason
    pub fn failed(&self) -> usize {
        self.rows - self.successful
    }

    /// Percentage of rows that matched, 0 when there are no rows
    pub fn success_rate(&self) -> f64 {
        if self.rows == 0 {
            return 0.0;
        }
        self.successful as f64 / self.rows as f64 * 100.0
    }

    pub fn artists_per_second(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 { self.artists as f64 / secs } else { 0.0 }
    }

    /// Estimated speedup over a serial run (`artists * 0.2s / duration`)
    pub fn estimated_speedup(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.artists as f64 * SERIAL_SECONDS_PER_ARTIST / secs
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(term: &str) -> ArtistRecord {
        ArtistRecord {
            search_term: term.to_string(),
            artist_name: Some(term.to_string()),
            artist_id: Some(1),
            followers_count: Some(1),
            outcome: LookupOutcome::Found,
        }
    }

    #[test]
    fn test_counts() {
        let records = vec![
            found("A"),
            found("B"),
            ArtistRecord::unresolved("C", LookupOutcome::NoMatch),
            ArtistRecord::unresolved("D", LookupOutcome::Failed("timeout".to_string())),
        ];
        let summary = CollectionSummary::from_records(4, &records, Duration::from_secs(2));

        assert_eq!(summary.rows, 4);
        assert_eq!(summary.successful, 2);
        assert_eq!(summary.no_match, 1);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.failed(), 2);
        assert_eq!(summary.success_rate(), 50.0);
        assert_eq!(summary.artists_per_second(), 2.0);
    }

    #[test]
    fn test_empty_run() {
        let summary = CollectionSummary::from_records(0, &[], Duration::ZERO);
        assert_eq!(summary.success_rate(), 0.0);
        assert_eq!(summary.artists_per_second(), 0.0);
        assert_eq!(summary.estimated_speedup(), 1.0);
    }

    #[test]
    fn test_estimated_speedup() {
        let records: Vec<_> = (0..10).map(|i| found(&i.to_string())).collect();
        let summary = CollectionSummary::from_records(10, &records, Duration::from_secs(1));
        assert!((summary.estimated_speedup() - 2.0).abs() < 1e-9);
    }
}
