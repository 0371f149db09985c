pub mod chat;
pub mod forum;
pub mod health;
pub mod mood;
pub mod resource;
pub mod user;
