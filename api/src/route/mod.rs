use axum::Router;
use registry::AppRegistry;

pub mod admin;
pub mod grid;
pub mod health;
pub mod page;
pub mod reservation;
pub mod v1;

pub fn build_routers() -> Router<AppRegistry> {
    Router::new()
        .merge(v1::routes())
        .merge(page::build_page_routers())
}
