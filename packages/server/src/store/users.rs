use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, QueryFilter, Set,
};

use super::{Store, StoreResult};
use crate::entity::user;

/// A user ready to be persisted. The password is already hashed.
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

impl<C: ConnectionTrait> Store<'_, C> {
    pub async fn insert_user(&self, new: NewUser) -> StoreResult<user::Model> {
        let model = user::ActiveModel {
            username: Set(new.username),
            email: Set(new.email),
            password_hash: Set(new.password_hash),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        Ok(model.insert(self.conn).await?)
    }

    pub async fn get_user(&self, id: i32) -> StoreResult<Option<user::Model>> {
        Ok(user::Entity::find_by_id(id).one(self.conn).await?)
    }

    pub async fn find_user_by_email(&self, email: &str) -> StoreResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.conn)
            .await?)
    }

    /// First user holding either the email or the username.
    pub async fn find_user_by_email_or_username(
        &self,
        email: &str,
        username: &str,
    ) -> StoreResult<Option<user::Model>> {
        Ok(user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Email.eq(email))
                    .add(user::Column::Username.eq(username)),
            )
            .one(self.conn)
            .await?)
    }

    /// Delete a user and, through the schema's cascades, everything they own:
    /// posts (with all their comments), comments on other posts, mood entries
    /// and chat sessions. Returns whether the user existed.
    pub async fn delete_user(&self, id: i32) -> StoreResult<bool> {
        let res = user::Entity::delete_by_id(id).exec(self.conn).await?;
        Ok(res.rows_affected > 0)
    }
}
