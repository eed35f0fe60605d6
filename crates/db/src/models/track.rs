//! Track entity models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackvote_core::types::{DbId, Timestamp};

/// A row from the `tracks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Track {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub cover_url: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new track.
#[derive(Debug, Deserialize)]
pub struct CreateTrack {
    pub title: String,
    pub artist_id: DbId,
    pub cover_url: Option<String>,
    pub spotify_url: Option<String>,
    pub youtube_url: Option<String>,
    pub release_date: Option<NaiveDate>,
}

/// A track projected together with its artist name and aggregated score.
///
/// Produced by the ranking and recency queries; the artist is always
/// eager-loaded because every display of a track shows its artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RankedTrack {
    pub id: DbId,
    pub title: String,
    pub artist_id: DbId,
    pub artist_name: String,
    pub cover_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub score: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}
