use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::validate_max_chars;
use crate::entity::{comment, post};
use crate::error::AppError;
use crate::store::PostWithComments;

/// Request body for a new forum post.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreatePostRequest {
    /// Post title (at most 255 characters).
    #[schema(example = "Small wins this week")]
    pub title: String,
    #[schema(example = "Went for a walk every morning.")]
    pub content: String,
    /// Author. Trusted as sent.
    #[schema(example = 42)]
    pub user_id: i32,
}

pub fn validate_create_post(payload: &CreatePostRequest) -> Result<(), AppError> {
    validate_max_chars(&payload.title, "Title", 255)
}

/// Request body for a new comment.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateCommentRequest {
    #[schema(example = 7)]
    pub post_id: i32,
    #[schema(example = 42)]
    pub user_id: i32,
    #[schema(example = "That sounds great, keep it up!")]
    pub content: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CommentResponse {
    pub id: i32,
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<comment::Model> for CommentResponse {
    fn from(c: comment::Model) -> Self {
        Self {
            id: c.id,
            post_id: c.post_id,
            user_id: c.user_id,
            content: c.content,
            created_at: c.created_at,
        }
    }
}

/// A post without its comments, as returned on creation.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PostResponse {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<post::Model> for PostResponse {
    fn from(p: post::Model) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            title: p.title,
            content: p.content,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

/// A post with its comment thread, oldest comment first.
#[derive(Serialize, utoipa::ToSchema)]
pub struct PostWithCommentsResponse {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<CommentResponse>,
}

impl From<PostWithComments> for PostWithCommentsResponse {
    fn from(PostWithComments { post, comments }: PostWithComments) -> Self {
        Self {
            id: post.id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            comments: comments.into_iter().map(CommentResponse::from).collect(),
        }
    }
}
