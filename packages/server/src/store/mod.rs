//! Persistence for every entity, over a connection or an open transaction.
//!
//! Integrity rules (uniqueness, foreign keys, cascades) live in the schema;
//! this layer only classifies their violations so callers can tell a
//! duplicate from a dangling reference from a broken database.

mod chats;
mod forum;
mod moods;
mod resources;
mod users;

use sea_orm::{ConnectionTrait, DbErr, SqlErr};

pub use chats::NewChatSession;
pub use forum::{NewComment, NewPost, PostUpdate, PostWithComments};
pub use moods::NewMoodEntry;
pub use resources::NewResource;
pub use users::NewUser;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique constraint rejected the write.
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    /// A foreign key points at a row that does not exist.
    #[error("foreign key violated: {0}")]
    InvalidReference(String),
    #[error(transparent)]
    Db(DbErr),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Conflict(detail),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                StoreError::InvalidReference(detail)
            }
            _ => StoreError::Db(err),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

pub struct Store<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> Store<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}
