//! Repository for the `tracks` table, including the score aggregation,
//! ranking, and recency queries.
//!
//! Aggregates are always recomputed from the `votes` table; no counts are
//! cached on rows. Window filters compare against `votes.created_at` (the
//! time the opinion was first formed), never `updated_at`.

use chrono::NaiveDate;
use sqlx::PgPool;
use trackvote_core::score::TrackScore;
use trackvote_core::types::{DbId, Timestamp};

use crate::models::track::{CreateTrack, RankedTrack, Track};

/// Column list shared across plain track queries.
const COLUMNS: &str =
    "id, title, artist_id, cover_url, spotify_url, youtube_url, release_date, created_at";

/// Projection shared by the ranking and recency queries: track columns,
/// eager-loaded artist name, and the windowed aggregate.
const RANKED_SELECT: &str = "t.id, t.title, t.artist_id, a.name AS artist_name, t.cover_url, \
     t.release_date, \
     COALESCE(SUM(v.value), 0)::BIGINT AS score, \
     COUNT(v.id) FILTER (WHERE v.value = 1) AS upvotes, \
     COUNT(v.id) FILTER (WHERE v.value = -1) AS downvotes";

/// Provides CRUD and aggregation queries for tracks.
pub struct TrackRepo;

impl TrackRepo {
    /// Insert a new track, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrack) -> Result<Track, sqlx::Error> {
        let query = format!(
            "INSERT INTO tracks (title, artist_id, cover_url, spotify_url, youtube_url, release_date)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Track>(&query)
            .bind(&input.title)
            .bind(input.artist_id)
            .bind(&input.cover_url)
            .bind(&input.spotify_url)
            .bind(&input.youtube_url)
            .bind(input.release_date)
            .fetch_one(pool)
            .await
    }

    /// Find a track by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks WHERE id = $1");
        sqlx::query_as::<_, Track>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tracks, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Track>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tracks ORDER BY created_at DESC");
        sqlx::query_as::<_, Track>(&query).fetch_all(pool).await
    }

    /// List the tracks of one artist, newest first.
    pub async fn list_by_artist(pool: &PgPool, artist_id: DbId) -> Result<Vec<Track>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM tracks WHERE artist_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Track>(&query)
            .bind(artist_id)
            .fetch_all(pool)
            .await
    }

    /// Set the cached cover URL after a media lookup.
    pub async fn set_cover_url(pool: &PgPool, id: DbId, url: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE tracks SET cover_url = $2 WHERE id = $1")
            .bind(id)
            .bind(url)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete a track. Dependent votes are removed by the cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tracks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Aggregate the votes of one track, optionally restricted to votes
    /// created at or after `window_start`.
    ///
    /// A track with no qualifying votes yields the all-zero score.
    pub async fn score_for(
        pool: &PgPool,
        track_id: DbId,
        window_start: Option<Timestamp>,
    ) -> Result<TrackScore, sqlx::Error> {
        let (score, upvotes, downvotes): (i64, i64, i64) = sqlx::query_as(
            "SELECT COALESCE(SUM(v.value), 0)::BIGINT, \
                    COUNT(v.id) FILTER (WHERE v.value = 1), \
                    COUNT(v.id) FILTER (WHERE v.value = -1) \
             FROM votes v \
             WHERE v.track_id = $1 \
               AND ($2::TIMESTAMPTZ IS NULL OR v.created_at >= $2)",
        )
        .bind(track_id)
        .bind(window_start)
        .fetch_one(pool)
        .await?;
        Ok(TrackScore {
            score,
            upvotes,
            downvotes,
        })
    }

    /// Rank all tracks by windowed score, descending.
    ///
    /// The window filter lives in the LEFT JOIN condition so tracks with no
    /// qualifying votes still appear with score 0. Ties break on `t.id`
    /// ascending to keep the order deterministic.
    pub async fn ranked(
        pool: &PgPool,
        window_start: Option<Timestamp>,
        limit: i64,
    ) -> Result<Vec<RankedTrack>, sqlx::Error> {
        let query = format!(
            "SELECT {RANKED_SELECT} \
             FROM tracks t \
             JOIN artists a ON a.id = t.artist_id \
             LEFT JOIN votes v ON v.track_id = t.id \
               AND ($1::TIMESTAMPTZ IS NULL OR v.created_at >= $1) \
             GROUP BY t.id, a.name \
             ORDER BY score DESC, t.id ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, RankedTrack>(&query)
            .bind(window_start)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List tracks released on or after `cutoff`, most recent release first.
    ///
    /// Tracks without a release date never satisfy the comparison and are
    /// excluded. This is the "what's new" view: ordered by release date,
    /// not score, though scores are still projected for display.
    pub async fn recent(
        pool: &PgPool,
        cutoff: NaiveDate,
        limit: i64,
    ) -> Result<Vec<RankedTrack>, sqlx::Error> {
        let query = format!(
            "SELECT {RANKED_SELECT} \
             FROM tracks t \
             JOIN artists a ON a.id = t.artist_id \
             LEFT JOIN votes v ON v.track_id = t.id \
             WHERE t.release_date >= $1 \
             GROUP BY t.id, a.name \
             ORDER BY t.release_date DESC, t.id ASC \
             LIMIT $2"
        );
        sqlx::query_as::<_, RankedTrack>(&query)
            .bind(cutoff)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
