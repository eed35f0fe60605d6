//! User entity models and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use trackvote_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `password_hash` is nullable: accounts created through an external
/// identity provider carry no local credential.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new user.
#[derive(Debug)]
pub struct CreateUser {
    pub email: String,
    pub username: String,
    pub password_hash: Option<String>,
}
