//! Repository for the `artists` table.

use sqlx::PgPool;
use trackvote_core::types::DbId;

use crate::models::artist::{Artist, CreateArtist};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, image_url, created_at";

/// Provides CRUD operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateArtist) -> Result<Artist, sqlx::Error> {
        let query = format!(
            "INSERT INTO artists (name, image_url)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.image_url)
            .fetch_one(pool)
            .await
    }

    /// Find an artist by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all artists, alphabetically.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY name ASC");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Set the cached artist image URL after a media lookup.
    pub async fn set_image_url(pool: &PgPool, id: DbId, url: &str) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE artists SET image_url = $2 WHERE id = $1")
            .bind(id)
            .bind(url)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete an artist. Dependent tracks (and their votes) cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
