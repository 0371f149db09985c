use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resources")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    /// e.g. "Hotline", "Therapist", "Article"
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub resource_type: String,
    /// Phone number or email address.
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub contact_info: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub website_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    #[sea_orm(default_value = false)]
    pub is_verified: bool,
}

impl ActiveModelBehavior for ActiveModel {}
