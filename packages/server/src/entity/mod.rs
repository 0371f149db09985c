pub mod chat_session;
pub mod comment;
pub mod mood_entry;
pub mod post;
pub mod resource;
pub mod user;
