use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "chat_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,

    /// e.g. "Anxiety", "General Check-in"
    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub topic: Option<String>,
    pub session_start: DateTimeUtc,
    pub session_end: Option<DateTimeUtc>,
    /// Conversation log, stored verbatim.
    #[sea_orm(column_type = "Text", nullable)]
    pub log_content: Option<String>,
    /// Written later by the analysis service.
    #[sea_orm(column_type = "Text", nullable)]
    pub ai_summary: Option<String>,
}

impl ActiveModelBehavior for ActiveModel {}
