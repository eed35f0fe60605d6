//! Handlers for the `/tracks` resource: CRUD, ranking, and recency views.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use trackvote_core::error::CoreError;
use trackvote_core::ranking::{
    clamp_bound, RankingPeriod, DEFAULT_RANKING_LIMIT, DEFAULT_RECENT_DAYS, DEFAULT_RECENT_LIMIT,
};
use trackvote_core::score::TrackScore;
use trackvote_core::types::DbId;
use trackvote_db::models::artist::Artist;
use trackvote_db::models::track::{CreateTrack, RankedTrack, Track};
use trackvote_db::repositories::{ArtistRepo, TrackRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /tracks/ranking`.
#[derive(Debug, Deserialize)]
pub struct RankingParams {
    pub period: Option<String>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /tracks/recent`.
#[derive(Debug, Deserialize)]
pub struct RecentParams {
    pub days: Option<i64>,
    pub limit: Option<i64>,
}

/// A track with its artist and all-time aggregate, for the detail view.
#[derive(Debug, Serialize)]
pub struct TrackDetail {
    #[serde(flatten)]
    pub track: Track,
    pub artist: Artist,
    #[serde(flatten)]
    pub score: TrackScore,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/tracks
///
/// Create a track. If no cover URL is supplied, one is looked up
/// best-effort; lookup failure leaves the cover absent and is not an error.
pub async fn create(
    State(state): State<AppState>,
    _auth: AuthUser,
    Json(input): Json<CreateTrack>,
) -> AppResult<(StatusCode, Json<Track>)> {
    let title = input.title.trim();
    if title.is_empty() || title.chars().count() > 255 {
        return Err(AppError::Core(CoreError::Validation(
            "Title must be between 1 and 255 characters".into(),
        )));
    }

    let artist = ArtistRepo::find_by_id(&state.pool, input.artist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: input.artist_id,
        }))?;

    let mut track = TrackRepo::create(&state.pool, &input).await?;

    if track.cover_url.is_none() {
        if let Some(url) = state.media.search_track_cover(&artist.name, &track.title).await {
            TrackRepo::set_cover_url(&state.pool, track.id, &url).await?;
            track.cover_url = Some(url);
        }
    }

    Ok((StatusCode::CREATED, Json(track)))
}

/// GET /api/v1/tracks
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Track>>> {
    let tracks = TrackRepo::list(&state.pool).await?;
    Ok(Json(tracks))
}

/// GET /api/v1/tracks/{id}
///
/// Track detail with its artist and all-time score. A track nobody voted
/// for reports the all-zero aggregate, never a missing field.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TrackDetail>> {
    let track = TrackRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))?;
    let artist = ArtistRepo::find_by_id(&state.pool, track.artist_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Artist",
            id: track.artist_id,
        }))?;
    let score = TrackRepo::score_for(&state.pool, id, None).await?;

    Ok(Json(TrackDetail {
        track,
        artist,
        score,
    }))
}

/// GET /api/v1/tracks/ranking?period=week|month|all&limit=N
///
/// Leaderboard over a trailing window. Unknown periods fall back to
/// all-time; the limit is clamped.
pub async fn ranking(
    State(state): State<AppState>,
    Query(params): Query<RankingParams>,
) -> AppResult<Json<Vec<RankedTrack>>> {
    let period = RankingPeriod::parse(params.period.as_deref().unwrap_or("all"));
    let window_start = period.window_start(Utc::now());
    let limit = clamp_bound(params.limit, DEFAULT_RANKING_LIMIT);

    let ranked = TrackRepo::ranked(&state.pool, window_start, limit).await?;
    Ok(Json(ranked))
}

/// GET /api/v1/tracks/recent?days=N&limit=N
///
/// Tracks released within the trailing window, most recent release first.
pub async fn recent(
    State(state): State<AppState>,
    Query(params): Query<RecentParams>,
) -> AppResult<Json<Vec<RankedTrack>>> {
    let days = clamp_bound(params.days, DEFAULT_RECENT_DAYS);
    let limit = clamp_bound(params.limit, DEFAULT_RECENT_LIMIT);
    let cutoff = (Utc::now() - Duration::days(days)).date_naive();

    let tracks = TrackRepo::recent(&state.pool, cutoff, limit).await?;
    Ok(Json(tracks))
}

/// DELETE /api/v1/tracks/{id}
///
/// Remove a track; its votes go with it.
pub async fn delete(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TrackRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id,
        }))
    }
}
