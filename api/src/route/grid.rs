use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::grid::show_box_list;

pub fn build_grid_routers() -> Router<AppRegistry> {
    Router::new().route("/boxes", get(show_box_list))
}
