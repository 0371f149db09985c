use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mood_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "Cascade")]
    pub user: HasOne<super::user::Entity>,

    /// 1 (very low) to 10 (very high).
    pub mood_score: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,

    pub entry_date: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
