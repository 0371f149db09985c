use serde::Serialize;

#[derive(Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    #[schema(example = "Welcome to the Wellness Platform API - Status: Operational")]
    pub message: String,
}
