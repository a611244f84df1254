use super::{
    admin::build_admin_routers, grid::build_grid_routers, health::build_health_check_routers,
    reservation::build_reservation_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routers())
        .merge(build_grid_routers())
        .merge(build_reservation_routers())
        .merge(build_admin_routers());
    Router::new().nest("/api", router)
}
