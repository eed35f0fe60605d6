//! Route definitions for the `/tracks` resource.
//!
//! `/ranking` and `/recent` are registered before `/{id}` so the literal
//! segments are not captured as track ids.

use axum::routing::get;
use axum::Router;

use crate::handlers::tracks;
use crate::state::AppState;

/// Routes mounted at `/tracks`.
///
/// ```text
/// GET    /            -> list
/// POST   /            -> create (requires auth)
/// GET    /ranking     -> ranking (?period=&limit=)
/// GET    /recent      -> recent (?days=&limit=)
/// GET    /{id}        -> get_by_id
/// DELETE /{id}        -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tracks::list).post(tracks::create))
        .route("/ranking", get(tracks::ranking))
        .route("/recent", get(tracks::recent))
        .route("/{id}", get(tracks::get_by_id).delete(tracks::delete))
}
