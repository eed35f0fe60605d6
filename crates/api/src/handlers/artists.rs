//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use trackvote_core::error::CoreError;
use trackvote_core::types::DbId;
use trackvote_db::models::artist::{Artist, CreateArtist};
use trackvote_db::models::track::Track;
use trackvote_db::repositories::{ArtistRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// An artist with their tracks, for the detail view.
#[derive(Debug, Serialize)]
pub struct ArtistDetail {
    #[serde(flatten)]
    pub artist: Artist,
    pub tracks: Vec<Track>,
}

/// POST /api/v1/artists
///
/// Create an artist. If no image URL is supplied, one is looked up
/// best-effort.
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateArtist>,
) -> AppResult<(StatusCode, Json<Artist>)> {
    let name = input.name.trim();
    if name.is_empty() || name.chars().count() > 255 {
        return Err(AppError::Core(CoreError::Validation(
            "Artist name must be between 1 and 255 characters".into(),
        )));
    }

    let mut artist = ArtistRepo::create(&state.pool, &input).await?;

    if artist.image_url.is_none() {
        if let Some(url) = state.media.search_artist_image(&artist.name).await {
            ArtistRepo::set_image_url(&state.pool, artist.id, &url).await?;
            artist.image_url = Some(url);
        }
    }

    Ok((StatusCode::CREATED, Json(artist)))
}

/// GET /api/v1/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Artist>>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(artists))
}

/// GET /api/v1/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ArtistDetail>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id,
        }))?;
    let tracks = TrackRepo::list_by_artist(&state.pool, id).await?;
    Ok(Json(ArtistDetail { artist, tracks }))
}
