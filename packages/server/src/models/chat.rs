use serde::{Deserialize, Serialize};

use super::shared::validate_optional_max_chars;
use crate::error::AppError;

/// Request body for starting a chat session.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct StartChatRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    /// At most 100 characters.
    #[schema(example = "Anxiety")]
    pub topic: Option<String>,
    /// Opening message or full transcript, stored verbatim.
    #[schema(example = "I have been feeling on edge lately.")]
    pub log_content: String,
}

pub fn validate_start_chat(payload: &StartChatRequest) -> Result<(), AppError> {
    validate_optional_max_chars(payload.topic.as_deref(), "Topic", 100)
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct StartChatResponse {
    #[schema(example = "Chat session started and logged successfully.")]
    pub message: String,
    #[schema(example = 3)]
    pub session_id: i32,
}
