use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::{Store, StoreResult};
use crate::entity::resource;

pub struct NewResource {
    pub name: String,
    pub resource_type: String,
    pub contact_info: Option<String>,
    pub website_url: Option<String>,
    pub description: Option<String>,
    pub is_verified: bool,
}

impl<C: ConnectionTrait> Store<'_, C> {
    pub async fn insert_resource(&self, new: NewResource) -> StoreResult<resource::Model> {
        let model = resource::ActiveModel {
            name: Set(new.name),
            resource_type: Set(new.resource_type),
            contact_info: Set(new.contact_info),
            website_url: Set(new.website_url),
            description: Set(new.description),
            is_verified: Set(new.is_verified),
            ..Default::default()
        };
        Ok(model.insert(self.conn).await?)
    }

    /// Only verified resources are ever exposed.
    pub async fn list_verified_resources(&self) -> StoreResult<Vec<resource::Model>> {
        Ok(resource::Entity::find()
            .filter(resource::Column::IsVerified.eq(true))
            .order_by_asc(resource::Column::Id)
            .all(self.conn)
            .await?)
    }

    pub async fn count_resources(&self) -> StoreResult<u64> {
        Ok(resource::Entity::find().count(self.conn).await?)
    }
}
