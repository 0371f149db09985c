use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::TransactionTrait;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::forum::*;
use crate::state::AppState;
use crate::store::{NewComment, NewPost, Store, StoreError};

#[utoipa::path(
    post,
    path = "/posts/",
    tag = "Community",
    operation_id = "createPost",
    summary = "Create a forum post",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = PostResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR) or unknown user (INVALID_REFERENCE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(user_id = payload.user_id))]
pub async fn create_post(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_create_post(&payload)?;

    let txn = state.db.begin().await?;
    let post = Store::new(&txn)
        .insert_post(NewPost {
            user_id: payload.user_id,
            title: payload.title,
            content: payload.content,
        })
        .await
        .map_err(|e| match e {
            StoreError::InvalidReference(_) => AppError::InvalidReference("User not found".into()),
            other => AppError::from(other),
        })?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(PostResponse::from(post))))
}

#[utoipa::path(
    get,
    path = "/posts/",
    tag = "Community",
    operation_id = "listPosts",
    summary = "List posts with their comments",
    description = "Returns every post, newest first. Each post carries its full comment list in the order the comments were written.",
    responses(
        (status = 200, description = "Posts with comments", body = Vec<PostWithCommentsResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Vec<PostWithCommentsResponse>>, AppError> {
    let posts = Store::new(&state.db).list_posts_with_comments().await?;
    Ok(Json(posts.into_iter().map(Into::into).collect()))
}

#[utoipa::path(
    post,
    path = "/comments/",
    tag = "Community",
    operation_id = "createComment",
    summary = "Comment on a post",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = CommentResponse),
        (status = 400, description = "Validation error (VALIDATION_ERROR) or unknown post/user (INVALID_REFERENCE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(post_id = payload.post_id, user_id = payload.user_id))]
pub async fn create_comment(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let txn = state.db.begin().await?;
    let comment = Store::new(&txn)
        .insert_comment(NewComment {
            post_id: payload.post_id,
            user_id: payload.user_id,
            content: payload.content,
        })
        .await
        .map_err(|e| match e {
            StoreError::InvalidReference(_) => {
                AppError::InvalidReference("Post or user not found".into())
            }
            other => AppError::from(other),
        })?;
    txn.commit().await?;

    Ok((StatusCode::CREATED, Json(CommentResponse::from(comment))))
}
