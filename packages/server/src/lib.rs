pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod seed;
pub mod state;
pub mod store;
pub mod utils;

use std::time::Duration;

use axum::http::HeaderValue;
use axum::http::header::InvalidHeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Wellness Platform API",
        version = "1.0.0",
        description = "Backend for the mental wellness platform: registration, community forum, mood tracking, chat session logging and a directory of verified support resources."
    ),
    tags(
        (name = "Health", description = "Service status"),
        (name = "Users", description = "Registration"),
        (name = "Community", description = "Forum posts and comments"),
        (name = "Mental Health Tracker", description = "Mood logging and history"),
        (name = "AI Chatbot", description = "Chat session logging"),
        (name = "Resources", description = "Verified support resources"),
    ),
)]
struct ApiDoc;

/// Build the CORS layer.
///
/// A permissive config mirrors the caller's origin, methods and headers
/// instead of answering `*`, which browsers refuse alongside credentials.
pub fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = if config.is_permissive() {
        tracing::warn!("CORS accepts any origin; restrict server.cors.allow_origins in production");
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .allow_origins
            .iter()
            .map(|origin| origin.parse())
            .collect::<Result<Vec<HeaderValue>, _>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials)
        .max_age(Duration::from_secs(config.max_age)))
}

/// Build the application router.
pub fn build_router(state: AppState) -> Result<axum::Router, InvalidHeaderValue> {
    let cors = cors_layer(&state.config.server.cors)?;

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::api_routes())
        .split_for_parts();

    Ok(router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(cors))
}
