use axum::{Json, extract::State};
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::chat::*;
use crate::state::AppState;
use crate::store::{NewChatSession, Store, StoreError};

/// Open a chat session and store its initial log. No model is called here;
/// summaries are filled in later by a separate analysis process.
#[utoipa::path(
    post,
    path = "/chats/start",
    tag = "AI Chatbot",
    operation_id = "startChat",
    summary = "Start and log a chat session",
    request_body = StartChatRequest,
    responses(
        (status = 200, description = "Session logged", body = StartChatResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR) or unknown user (INVALID_REFERENCE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn start_chat(
    State(state): State<AppState>,
    AppJson(payload): AppJson<StartChatRequest>,
) -> Result<Json<StartChatResponse>, AppError> {
    validate_start_chat(&payload)?;

    let txn = state.db.begin().await?;
    let session = Store::new(&txn)
        .insert_chat_session(NewChatSession {
            user_id: payload.user_id,
            topic: payload.topic,
            log_content: payload.log_content,
        })
        .await
        .map_err(|e| match e {
            StoreError::InvalidReference(_) => AppError::InvalidReference("User not found".into()),
            other => AppError::from(other),
        })?;
    txn.commit().await?;

    Ok(Json(StartChatResponse {
        message: "Chat session started and logged successfully.".into(),
        session_id: session.id,
    }))
}
