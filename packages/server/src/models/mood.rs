use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entity::mood_entry;
use crate::error::AppError;

pub const MIN_MOOD_SCORE: i32 = 1;
pub const MAX_MOOD_SCORE: i32 = 10;

/// Request body for logging a mood.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateMoodEntryRequest {
    #[schema(example = 42)]
    pub user_id: i32,
    /// 1 (very low) to 10 (very high), inclusive.
    #[schema(example = 7, minimum = 1, maximum = 10)]
    pub mood_score: i32,
    #[schema(example = "Slept well.")]
    pub notes: Option<String>,
}

pub fn validate_create_mood_entry(payload: &CreateMoodEntryRequest) -> Result<(), AppError> {
    if !(MIN_MOOD_SCORE..=MAX_MOOD_SCORE).contains(&payload.mood_score) {
        return Err(AppError::Validation(
            "Mood score must be between 1 and 10.".into(),
        ));
    }
    Ok(())
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct MoodEntryResponse {
    pub id: i32,
    pub user_id: i32,
    pub mood_score: i32,
    pub notes: Option<String>,
    pub entry_date: DateTime<Utc>,
}

impl From<mood_entry::Model> for MoodEntryResponse {
    fn from(m: mood_entry::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            mood_score: m.mood_score,
            notes: m.notes,
            entry_date: m.entry_date,
        }
    }
}
