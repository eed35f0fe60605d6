//! Route definitions, one module per resource.

pub mod artists;
pub mod auth;
pub mod health;
pub mod tracks;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                 register (public)
/// /auth/login                    login (public)
/// /auth/me                       current profile (requires auth)
///
/// /tracks                        list (GET), create (POST, auth)
/// /tracks/ranking                leaderboard (?period=&limit=)
/// /tracks/recent                 latest releases (?days=&limit=)
/// /tracks/{id}                   detail with score (GET), delete (auth)
///
/// /artists                       list (GET), create (POST, auth)
/// /artists/{id}                  detail with tracks (GET)
///
/// /votes                         cast / upsert (POST, auth)
/// /votes/{id}                    update (PUT), remove (DELETE) -- owner only
///
/// /users/me/votes                caller's votes (GET, auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/tracks", tracks::router())
        .nest("/artists", artists::router())
        .nest("/votes", votes::router())
        .nest("/users", votes::my_votes_router())
}
