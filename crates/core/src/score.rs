//! Score arithmetic.
//!
//! The aggregate for a track is always recomputed from the vote rows; no
//! entity carries cached counts. [`TrackScore`] is the single shape every
//! aggregation produces, whether it comes from a SQL projection or from
//! [`TrackScore::from_values`] in tests.

use serde::Serialize;

/// Aggregated vote totals for one track within a window.
///
/// A track with no qualifying votes has the all-zero score; absence is
/// never represented as NULL or a missing row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrackScore {
    /// Net sum of vote values.
    pub score: i64,
    /// Count of +1 votes.
    pub upvotes: i64,
    /// Count of -1 votes.
    pub downvotes: i64,
}

impl TrackScore {
    /// Fold raw vote values into an aggregate.
    ///
    /// Values outside `{-1, +1}` cannot exist in the ledger (CHECK
    /// constraint) and are ignored here.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = i16>,
    {
        let mut acc = Self::default();
        for value in values {
            match value {
                1 => {
                    acc.score += 1;
                    acc.upvotes += 1;
                }
                -1 => {
                    acc.score -= 1;
                    acc.downvotes += 1;
                }
                _ => {}
            }
        }
        acc
    }
}
