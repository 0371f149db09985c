use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Select,
    Set,
};

use super::{Store, StoreResult};
use crate::entity::{comment, post};

pub struct NewPost {
    pub user_id: i32,
    pub title: String,
    pub content: String,
}

/// Partial post edit. `None` leaves the column untouched.
#[derive(Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

pub struct NewComment {
    pub post_id: i32,
    pub user_id: i32,
    pub content: String,
}

/// A post with its full comment thread, oldest comment first.
pub struct PostWithComments {
    pub post: post::Model,
    pub comments: Vec<comment::Model>,
}

impl<C: ConnectionTrait> Store<'_, C> {
    pub async fn insert_post(&self, new: NewPost) -> StoreResult<post::Model> {
        let now = Utc::now();
        let model = post::ActiveModel {
            user_id: Set(new.user_id),
            title: Set(new.title),
            content: Set(new.content),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        Ok(model.insert(self.conn).await?)
    }

    pub async fn get_post(&self, id: i32) -> StoreResult<Option<post::Model>> {
        Ok(post::Entity::find_by_id(id).one(self.conn).await?)
    }

    /// Apply an edit and refresh `updated_at`.
    /// Returns `None` when the post does not exist.
    pub async fn update_post(&self, id: i32, upd: PostUpdate) -> StoreResult<Option<post::Model>> {
        let Some(existing) = post::Entity::find_by_id(id).one(self.conn).await? else {
            return Ok(None);
        };
        let mut active: post::ActiveModel = existing.into();
        if let Some(title) = upd.title {
            active.title = Set(title);
        }
        if let Some(content) = upd.content {
            active.content = Set(content);
        }
        active.updated_at = Set(Utc::now());
        Ok(Some(active.update(self.conn).await?))
    }

    /// Posts written by one user, newest first.
    pub async fn list_posts_by_user(&self, user_id: i32) -> StoreResult<Vec<post::Model>> {
        Ok(post::Entity::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(self.conn)
            .await?)
    }

    /// Every post, newest first, each with its comments in insertion order.
    pub async fn list_posts_with_comments(&self) -> StoreResult<Vec<PostWithComments>> {
        let posts = post::Entity::find()
            .order_by_desc(post::Column::CreatedAt)
            .order_by_desc(post::Column::Id)
            .all(self.conn)
            .await?;
        if posts.is_empty() {
            return Ok(Vec::new());
        }

        // Every post is listed, so every comment is needed.
        let comments = comments_in_thread_order().all(self.conn).await?;

        let mut by_post: HashMap<i32, Vec<comment::Model>> = HashMap::new();
        for c in comments {
            by_post.entry(c.post_id).or_default().push(c);
        }

        Ok(posts
            .into_iter()
            .map(|post| {
                let comments = by_post.remove(&post.id).unwrap_or_default();
                PostWithComments { post, comments }
            })
            .collect())
    }

    pub async fn insert_comment(&self, new: NewComment) -> StoreResult<comment::Model> {
        let model = comment::ActiveModel {
            post_id: Set(new.post_id),
            user_id: Set(new.user_id),
            content: Set(new.content),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        Ok(model.insert(self.conn).await?)
    }

    pub async fn list_comments_for_post(&self, post_id: i32) -> StoreResult<Vec<comment::Model>> {
        Ok(comments_in_thread_order()
            .filter(comment::Column::PostId.eq(post_id))
            .all(self.conn)
            .await?)
    }
}

fn comments_in_thread_order() -> Select<comment::Entity> {
    comment::Entity::find()
        .order_by_asc(comment::Column::CreatedAt)
        .order_by_asc(comment::Column::Id)
}
