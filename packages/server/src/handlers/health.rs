use axum::Json;
use tracing::instrument;

use crate::models::health::HealthResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    operation_id = "health",
    summary = "Health marker",
    responses(
        (status = 200, description = "Service is up", body = HealthResponse),
    ),
)]
#[instrument]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Welcome to the Wellness Platform API - Status: Operational".into(),
    })
}
