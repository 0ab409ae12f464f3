use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::admin::show_dashboard;

pub fn build_admin_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new().route("/dashboard", get(show_dashboard));

    Router::new().nest("/admin", admin_routers)
}
