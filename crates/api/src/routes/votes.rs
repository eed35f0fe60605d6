//! Route definitions for the `/votes` resource and the per-user vote listing.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Routes mounted at `/votes`. All require authentication.
///
/// ```text
/// POST   /        -> cast (upsert per (user, track) pair)
/// PUT    /{id}    -> update (owner only)
/// DELETE /{id}    -> remove (owner only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(votes::cast))
        .route("/{id}", put(votes::update).delete(votes::remove))
}

/// Routes mounted at `/users`.
///
/// ```text
/// GET /me/votes   -> my_votes (requires auth)
/// ```
pub fn my_votes_router() -> Router<AppState> {
    Router::new().route("/me/votes", get(votes::my_votes))
}
