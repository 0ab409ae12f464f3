use crate::database::{model::resource::ResourceRow, ConnectionPool};
use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::ResourceId,
    resource::{
        event::{CreateResource, DeleteResource, UpdateResource},
        Resource,
    },
};
use kernel::repository::resource::ResourceRepository;
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct ResourceRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl ResourceRepository for ResourceRepositoryImpl {
    async fn create(&self, event: CreateResource) -> AppResult<Resource> {
        let resource_id = ResourceId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO resources
                    (resource_id, resource_name, resource_type, capacity,
                     location, available_from, available_to, description)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(resource_id)
        .bind(&event.name)
        .bind(&event.resource_type)
        .bind(event.capacity)
        .bind(&event.location)
        .bind(&event.available_from)
        .bind(&event.available_to)
        .bind(&event.description)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "no resource record has been created".into(),
            ));
        }

        self.find_by_id(resource_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("resource {resource_id} not found"))
        })
    }

    async fn find_all(&self) -> AppResult<Vec<Resource>> {
        let rows: Vec<ResourceRow> = sqlx::query_as(
            r#"
                SELECT
                    resource_id, resource_name, resource_type, capacity,
                    location, available_from, available_to, description
                FROM resources
                ORDER BY resource_name ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(rows.into_iter().map(Resource::from).collect())
    }

    async fn find_by_id(&self, resource_id: ResourceId) -> AppResult<Option<Resource>> {
        let row: Option<ResourceRow> = sqlx::query_as(
            r#"
                SELECT
                    resource_id, resource_name, resource_type, capacity,
                    location, available_from, available_to, description
                FROM resources
                WHERE resource_id = $1
            "#,
        )
        .bind(resource_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Resource::from))
    }

    async fn update(&self, event: UpdateResource) -> AppResult<Resource> {
        let res = sqlx::query(
            r#"
                UPDATE resources
                SET
                    resource_name = COALESCE($2, resource_name),
                    resource_type = COALESCE($3, resource_type),
                    capacity = COALESCE($4, capacity),
                    location = COALESCE($5, location),
                    available_from = COALESCE($6, available_from),
                    available_to = COALESCE($7, available_to),
                    description = COALESCE($8, description),
                    updated_at = CURRENT_TIMESTAMP
                WHERE resource_id = $1
            "#,
        )
        .bind(event.resource_id)
        .bind(&event.name)
        .bind(&event.resource_type)
        .bind(event.capacity)
        .bind(&event.location)
        .bind(&event.available_from)
        .bind(&event.available_to)
        .bind(&event.description)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "resource {} not found",
                event.resource_id
            )));
        }

        self.find_by_id(event.resource_id).await?.ok_or_else(|| {
            AppError::EntityNotFound(format!("resource {} not found", event.resource_id))
        })
    }

    async fn delete(&self, event: DeleteResource) -> AppResult<()> {
        let res = sqlx::query("DELETE FROM resources WHERE resource_id = $1")
            .bind(event.resource_id)
            .execute(self.db.inner_ref())
            .await
            .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "resource {} not found",
                event.resource_id
            )));
        }

        Ok(())
    }
}
