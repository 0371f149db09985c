use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::{Store, StoreResult};
use crate::entity::mood_entry;

/// A mood entry whose score has already been range-checked.
pub struct NewMoodEntry {
    pub user_id: i32,
    pub mood_score: i32,
    pub notes: Option<String>,
}

impl<C: ConnectionTrait> Store<'_, C> {
    pub async fn insert_mood_entry(&self, new: NewMoodEntry) -> StoreResult<mood_entry::Model> {
        let model = mood_entry::ActiveModel {
            user_id: Set(new.user_id),
            mood_score: Set(new.mood_score),
            notes: Set(new.notes),
            entry_date: Set(Utc::now()),
            ..Default::default()
        };
        Ok(model.insert(self.conn).await?)
    }

    /// A user's mood history, most recent entry first.
    pub async fn list_mood_entries_for_user(
        &self,
        user_id: i32,
    ) -> StoreResult<Vec<mood_entry::Model>> {
        Ok(mood_entry::Entity::find()
            .filter(mood_entry::Column::UserId.eq(user_id))
            .order_by_desc(mood_entry::Column::EntryDate)
            .order_by_desc(mood_entry::Column::Id)
            .all(self.conn)
            .await?)
    }
}
