use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::page::{
    show_admin_login, show_booking_page, submit_admin_login, submit_admin_reset, submit_booking,
};

pub fn build_page_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/", get(show_booking_page))
        .route("/reserve", post(submit_booking))
        .route("/admin", get(show_admin_login).post(submit_admin_login))
        .route("/admin/reset", post(submit_admin_reset))
}
