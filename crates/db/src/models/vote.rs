//! Vote entity model.

use serde::Serialize;
use sqlx::FromRow;
use trackvote_core::types::{DbId, Timestamp};

/// A row from the `votes` table.
///
/// At most one row exists per (user, track) pair; re-casting mutates the
/// existing row in place. `created_at` marks when the vote was first cast
/// and is never changed by later edits.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub track_id: DbId,
    pub value: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
