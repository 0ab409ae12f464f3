use crate::{extractor::AuthorizedUser, model::admin::DashboardResponse};
use axum::{extract::State, Json};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

pub async fn show_dashboard(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<DashboardResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    registry
        .dashboard_repository()
        .summary()
        .await
        .map(DashboardResponse::from)
        .map(Json)
}
