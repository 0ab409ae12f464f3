use crate::model::{
    id::ResourceId,
    resource::{
        event::{CreateResource, DeleteResource, UpdateResource},
        Resource,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    async fn create(&self, event: CreateResource) -> AppResult<Resource>;
    /// Full directory, sorted by name.
    async fn find_all(&self) -> AppResult<Vec<Resource>>;
    async fn find_by_id(&self, resource_id: ResourceId) -> AppResult<Option<Resource>>;
    async fn update(&self, event: UpdateResource) -> AppResult<Resource>;
    async fn delete(&self, event: DeleteResource) -> AppResult<()>;
}
