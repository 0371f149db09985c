use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::{AppJson, AppPath};
use crate::models::mood::*;
use crate::state::AppState;
use crate::store::{NewMoodEntry, Store, StoreError};

#[utoipa::path(
    post,
    path = "/moods/",
    tag = "Mental Health Tracker",
    operation_id = "logMood",
    summary = "Log a mood score",
    description = "Records a mood score from 1 (very low) to 10 (very high) with optional notes. Scores outside that range are rejected before anything is stored.",
    request_body = CreateMoodEntryRequest,
    responses(
        (status = 201, description = "Mood logged", body = MoodEntryResponse),
        (status = 400, description = "Score out of range (VALIDATION_ERROR) or unknown user (INVALID_REFERENCE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn log_mood(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMoodEntryRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_mood_entry(&payload)?;

    let txn = state.db.begin().await?;
    let entry = Store::new(&txn)
        .insert_mood_entry(NewMoodEntry {
            user_id: payload.user_id,
            mood_score: payload.mood_score,
            notes: payload.notes,
        })
        .await
        .map_err(|e| match e {
            StoreError::InvalidReference(_) => AppError::InvalidReference("User not found".into()),
            other => AppError::from(other),
        })?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(MoodEntryResponse::from(entry))))
}

#[utoipa::path(
    get,
    path = "/moods/{user_id}",
    tag = "Mental Health Tracker",
    operation_id = "getMoodHistory",
    summary = "Mood history for a user",
    description = "Returns the user's mood entries, most recent first. Unknown users have an empty history.",
    params(("user_id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Mood entries", body = Vec<MoodEntryResponse>),
        (status = 400, description = "Malformed user ID (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_mood_history(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<i32>,
) -> Result<Json<Vec<MoodEntryResponse>>, AppError> {
    let entries = Store::new(&state.db)
        .list_mood_entries_for_user(user_id)
        .await?;
    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
