use axum::{Json, extract::State};
use tracing::instrument;

use crate::error::AppError;
use crate::models::resource::ResourceResponse;
use crate::state::AppState;
use crate::store::Store;

#[utoipa::path(
    get,
    path = "/resources/",
    tag = "Resources",
    operation_id = "listResources",
    summary = "List verified support resources",
    description = "Hotlines, therapists and articles that have been verified. Unverified entries are never listed.",
    responses(
        (status = 200, description = "Verified resources", body = Vec<ResourceResponse>),
    ),
)]
#[instrument(skip(state))]
pub async fn list_resources(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceResponse>>, AppError> {
    let resources = Store::new(&state.db).list_verified_resources().await?;
    Ok(Json(resources.into_iter().map(Into::into).collect()))
}
