//! Repository for the `votes` table: the vote ledger.
//!
//! One row per (user, track) pair, enforced by the `uq_votes_user_track`
//! constraint. Casting is a single atomic upsert, so two concurrent casts
//! for the same pair serialize inside PostgreSQL and the later commit wins;
//! the application never sees the constraint race.

use sqlx::PgPool;
use trackvote_core::types::DbId;

use crate::models::vote::Vote;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, track_id, value, created_at, updated_at";

/// Provides the vote ledger operations.
pub struct VoteRepo;

impl VoteRepo {
    /// Cast a vote: create the row for this (user, track) pair, or if one
    /// already exists overwrite its value and bump `updated_at`.
    ///
    /// `created_at` and the row identity are preserved on the update path.
    /// The caller validates `value` and the track's existence beforehand.
    pub async fn cast(
        pool: &PgPool,
        user_id: DbId,
        track_id: DbId,
        value: i16,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (user_id, track_id, value) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_votes_user_track \
             DO UPDATE SET value = EXCLUDED.value, updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(track_id)
            .bind(value)
            .fetch_one(pool)
            .await
    }

    /// Find a vote by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE id = $1");
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the vote a user has cast for a track, if any.
    pub async fn find_user_vote_for_track(
        pool: &PgPool,
        user_id: DbId,
        track_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE user_id = $1 AND track_id = $2");
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(track_id)
            .fetch_optional(pool)
            .await
    }

    /// List all votes of a user, most recently cast first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Vote>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM votes WHERE user_id = $1 ORDER BY created_at DESC");
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite the value of an existing vote, bumping `updated_at` only.
    ///
    /// Returns `None` if no row with the given `id` exists. Ownership is
    /// checked by the caller before this runs.
    pub async fn update_value(
        pool: &PgPool,
        id: DbId,
        value: i16,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!(
            "UPDATE votes SET value = $2, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(pool)
            .await
    }

    /// Remove a vote. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
