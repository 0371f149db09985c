use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};

use super::{Store, StoreResult};
use crate::entity::chat_session;

pub struct NewChatSession {
    pub user_id: i32,
    pub topic: Option<String>,
    pub log_content: String,
}

impl<C: ConnectionTrait> Store<'_, C> {
    /// Open a session with its initial log. End time and summary stay empty.
    pub async fn insert_chat_session(
        &self,
        new: NewChatSession,
    ) -> StoreResult<chat_session::Model> {
        let model = chat_session::ActiveModel {
            user_id: Set(new.user_id),
            topic: Set(new.topic),
            session_start: Set(Utc::now()),
            session_end: Set(None),
            log_content: Set(Some(new.log_content)),
            ai_summary: Set(None),
            ..Default::default()
        };
        Ok(model.insert(self.conn).await?)
    }

    pub async fn get_chat_session(&self, id: i32) -> StoreResult<Option<chat_session::Model>> {
        Ok(chat_session::Entity::find_by_id(id).one(self.conn).await?)
    }
}
