//! Artist entity models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trackvote_core::types::{DbId, Timestamp};

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new artist.
#[derive(Debug, Deserialize)]
pub struct CreateArtist {
    pub name: String,
    pub image_url: Option<String>,
}
