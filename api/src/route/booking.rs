use axum::{
    routing::{get, post, put},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking::{
    approve_booking, create_booking, reject_booking, show_booking_list, update_booking_status,
};

pub fn build_booking_routers() -> Router<AppRegistry> {
    let booking_routers = Router::new()
        .route("/", post(create_booking))
        .route("/", get(show_booking_list))
        .route("/:booking_id", put(update_booking_status))
        .route("/:booking_id/approve", put(approve_booking))
        .route("/:booking_id/reject", put(reject_booking));

    Router::new().nest("/bookings", booking_routers)
}
