use serde::Serialize;

use crate::entity::resource;

/// A verified support resource (hotline, therapist, article...).
#[derive(Serialize, utoipa::ToSchema)]
pub struct ResourceResponse {
    pub id: i32,
    #[schema(example = "Crisis Text Line")]
    pub name: String,
    #[schema(example = "Hotline")]
    pub resource_type: String,
    pub contact_info: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
}

impl From<resource::Model> for ResourceResponse {
    fn from(r: resource::Model) -> Self {
        Self {
            id: r.id,
            name: r.name,
            resource_type: r.resource_type,
            contact_info: r.contact_info,
            website_url: r.website_url,
            description: r.description,
        }
    }
}
