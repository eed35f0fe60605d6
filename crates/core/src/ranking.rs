//! Ranking periods and window math.
//!
//! A ranking is computed over a trailing window: the last 7 days, the last
//! 30 days, or all time. The window scopes which votes count by their
//! *creation* time; a vote edited later still counts in the window it was
//! first cast in.

use chrono::Duration;

use crate::types::Timestamp;

/// Default result size for ranking queries.
pub const DEFAULT_RANKING_LIMIT: i64 = 50;
/// Default trailing window for the "what's new" listing, in days.
pub const DEFAULT_RECENT_DAYS: i64 = 7;
/// Default result size for the "what's new" listing.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;
/// Upper bound applied to caller-supplied `limit` and `days` parameters.
pub const MAX_QUERY_BOUND: i64 = 100;

/// Trailing time window over which track scores are aggregated.
///
/// Built from query strings via [`RankingPeriod::parse`] rather than serde
/// so unknown values can degrade to all-time instead of erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingPeriod {
    /// Votes cast in the last 7 days.
    Week,
    /// Votes cast in the last 30 days.
    Month,
    /// All votes ever cast.
    All,
}

impl RankingPeriod {
    /// Parse a query-string period value.
    ///
    /// Unknown values fall back to [`RankingPeriod::All`] rather than
    /// erroring, so a stale client still gets a usable leaderboard.
    pub fn parse(value: &str) -> Self {
        match value {
            "week" => Self::Week,
            "month" => Self::Month,
            _ => Self::All,
        }
    }

    /// Start of the window relative to `now`, or `None` for all-time.
    pub fn window_start(self, now: Timestamp) -> Option<Timestamp> {
        match self {
            Self::Week => Some(now - Duration::days(7)),
            Self::Month => Some(now - Duration::days(30)),
            Self::All => None,
        }
    }
}

/// Clamp a caller-supplied positive bound (limit or day count) into
/// `1..=MAX_QUERY_BOUND`, substituting `default` when absent.
pub fn clamp_bound(requested: Option<i64>, default: i64) -> i64 {
    requested.unwrap_or(default).clamp(1, MAX_QUERY_BOUND)
}
