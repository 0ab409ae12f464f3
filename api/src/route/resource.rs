use axum::{
    routing::{delete, get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::resource::{
    delete_resource, register_resource, show_resource, show_resource_list, update_resource,
};

pub fn build_resource_routers() -> Router<AppRegistry> {
    let resource_routers = Router::new()
        .route("/", get(show_resource_list))
        .route("/", post(register_resource))
        .route("/:resource_id", get(show_resource))
        .route("/:resource_id", put(update_resource))
        .route("/:resource_id", delete(delete_resource));

    Router::new().nest("/resources", resource_routers)
}
