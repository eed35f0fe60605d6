//! Handlers for the `/votes` resource: the vote ledger API.
//!
//! The acting identity is always the [`AuthUser`] extractor parameter; a
//! vote may only ever be mutated by its owner. Casting is an upsert: the
//! second cast for the same (user, track) pair overwrites the first.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use trackvote_core::error::CoreError;
use trackvote_core::types::DbId;
use trackvote_core::vote::validate_vote_value;
use trackvote_db::models::vote::Vote;
use trackvote_db::repositories::{TrackRepo, VoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /votes`.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub track_id: DbId,
    pub value: i16,
}

/// Request body for `PUT /votes/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateVoteRequest {
    pub value: i16,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/votes
///
/// Cast a vote as the authenticated user. Creates the vote on the first
/// cast for this track, overwrites its value on every later cast. Returns
/// the created-or-updated row either way.
pub async fn cast(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CastVoteRequest>,
) -> AppResult<(StatusCode, Json<Vote>)> {
    validate_vote_value(input.value)?;

    if TrackRepo::find_by_id(&state.pool, input.track_id)
        .await?
        .is_none()
    {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Track",
            id: input.track_id,
        }));
    }

    let vote = VoteRepo::cast(&state.pool, auth.user_id, input.track_id, input.value).await?;
    tracing::info!(
        vote_id = %vote.id,
        track_id = %vote.track_id,
        value = vote.value,
        "vote cast"
    );
    Ok((StatusCode::CREATED, Json(vote)))
}

/// PUT /api/v1/votes/{id}
///
/// Overwrite the value of an existing vote owned by the caller.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVoteRequest>,
) -> AppResult<Json<Vote>> {
    validate_vote_value(input.value)?;

    let existing = VoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vote",
            id,
        }))?;
    check_ownership(&existing, auth)?;

    let vote = VoteRepo::update_value(&state.pool, id, input.value)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vote",
            id,
        }))?;
    Ok(Json(vote))
}

/// DELETE /api/v1/votes/{id}
///
/// Remove a vote owned by the caller. Subsequent aggregate reads no longer
/// include it.
pub async fn remove(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let existing = VoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Vote",
            id,
        }))?;
    check_ownership(&existing, auth)?;

    VoteRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/users/me/votes
///
/// The caller's votes, newest first. Lets clients render vote state
/// without re-deriving it from aggregates.
pub async fn my_votes(State(state): State<AppState>, auth: AuthUser) -> AppResult<Json<Vec<Vote>>> {
    let votes = VoteRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(votes))
}

/// Reject mutation of a vote the caller does not own.
///
/// The message is the same whoever the true owner is.
fn check_ownership(vote: &Vote, auth: AuthUser) -> Result<(), AppError> {
    if vote.user_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You cannot modify this vote".into(),
        )));
    }
    Ok(())
}
