use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::shared::normalize_email;
use crate::models::user::{CreateUserRequest, UserResponse, validate_create_user};
use crate::state::AppState;
use crate::store::{NewUser, Store, StoreError};
use crate::utils::hash;

/// Handle user registration.
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    operation_id = "createUser",
    summary = "Register a new user",
    description = "Creates a user with a unique username and email. The email domain is lower-cased before storage. The password is stored only as a salted Argon2 hash and is never returned.",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR) or email/username taken (ALREADY_REGISTERED)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(username = %payload.username))]
pub async fn create_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_user(&payload)?;
    let email = normalize_email(&payload.email);

    let password_hash = hash::hash_password(&payload.password)
        .map_err(|e| AppError::Internal(format!("Password hash error: {}", e)))?;

    let txn = state.db.begin().await?;
    let store = Store::new(&txn);

    if store
        .find_user_by_email_or_username(&email, &payload.username)
        .await?
        .is_some()
    {
        return Err(AppError::AlreadyRegistered);
    }

    let user = store
        .insert_user(NewUser {
            username: payload.username,
            email,
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Conflict(_) => {
                tracing::debug!("Registration race condition: unique constraint caught on insert");
                AppError::AlreadyRegistered
            }
            other => AppError::from(other),
        })?;

    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
