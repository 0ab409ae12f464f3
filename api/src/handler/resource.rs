use crate::{
    extractor::AuthorizedUser,
    model::resource::{
        CreateResourceRequest, ResourceResponse, ResourcesResponse, UpdateResourceRequest,
        UpdateResourceRequestWithId,
    },
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::{id::ResourceId, resource::event::DeleteResource};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use std::str::FromStr;

pub async fn show_resource_list(
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ResourcesResponse>> {
    registry
        .resource_repository()
        .find_all()
        .await
        .map(ResourcesResponse::from)
        .map(Json)
}

pub async fn show_resource(
    Path(resource_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ResourceResponse>> {
    let resource_id = parse_resource_id(&resource_id)?;
    registry
        .resource_repository()
        .find_by_id(resource_id)
        .await
        .and_then(|r| match r {
            Some(r) => Ok(Json(r.into())),
            None => Err(AppError::EntityNotFound(format!(
                "resource {resource_id} not found"
            ))),
        })
}

pub async fn register_resource(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateResourceRequest>,
) -> AppResult<(StatusCode, Json<ResourceResponse>)> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    registry
        .resource_repository()
        .create(req.into())
        .await
        .map(|r| (StatusCode::CREATED, Json(r.into())))
}

pub async fn update_resource(
    user: AuthorizedUser,
    Path(resource_id): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateResourceRequest>,
) -> AppResult<Json<ResourceResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;
    let resource_id = parse_resource_id(&resource_id)?;

    let update = UpdateResourceRequestWithId::new(resource_id, req);
    registry
        .resource_repository()
        .update(update.into())
        .await
        .map(|r| Json(r.into()))
}

pub async fn delete_resource(
    user: AuthorizedUser,
    Path(resource_id): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let resource_id = parse_resource_id(&resource_id)?;
    registry
        .resource_repository()
        .delete(DeleteResource { resource_id })
        .await
        .map(|_| StatusCode::OK)
}

// An id that is not a UUID cannot name any resource.
fn parse_resource_id(raw: &str) -> AppResult<ResourceId> {
    ResourceId::from_str(raw)
        .map_err(|_| AppError::EntityNotFound(format!("resource {raw} not found")))
}
