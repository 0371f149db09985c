use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers::{chat, forum, health, mood, resource, user};
use crate::state::AppState;

/// Every public endpoint, served from the root.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(health::health))
        .routes(routes!(user::create_user))
        .routes(routes!(forum::create_post, forum::list_posts))
        .routes(routes!(forum::create_comment))
        .routes(routes!(mood::log_mood))
        .routes(routes!(mood::get_mood_history))
        .routes(routes!(chat::start_chat))
        .routes(routes!(resource::list_resources))
}
