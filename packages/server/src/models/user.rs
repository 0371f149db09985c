use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::shared::{validate_email, validate_max_chars};
use crate::error::AppError;

/// Request body for user registration.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateUserRequest {
    /// Unique username (at most 50 characters).
    #[schema(example = "river_stone")]
    pub username: String,
    /// Unique email address (at most 100 characters).
    #[schema(example = "river@example.com")]
    pub email: String,
    /// Plaintext password. Only its salted hash is stored.
    #[schema(example = "s3cure_P@ss!")]
    pub password: String,
}

pub fn validate_create_user(payload: &CreateUserRequest) -> Result<(), AppError> {
    validate_max_chars(&payload.username, "Username", 50)?;
    validate_max_chars(&payload.email, "Email", 100)?;
    validate_email(&payload.email)?;
    Ok(())
}

/// A registered user. The password hash is never included.
#[derive(Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    #[schema(example = 42)]
    pub id: i32,
    #[schema(example = "river_stone")]
    pub username: String,
    #[schema(example = "river@example.com")]
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<crate::entity::user::Model> for UserResponse {
    fn from(user: crate::entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
        }
    }
}
