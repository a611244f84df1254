use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::admin::reset_database;

pub fn build_admin_routers() -> Router<AppRegistry> {
    let admin_routers = Router::new().route("/reset", post(reset_database));

    Router::new().nest("/admin", admin_routers)
}
