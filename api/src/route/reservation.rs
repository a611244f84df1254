use axum::{routing::post, Router};
use registry::AppRegistry;

use crate::handler::reservation::reserve_boxes;

pub fn build_reservation_routers() -> Router<AppRegistry> {
    Router::new().route("/reserve", post(reserve_boxes))
}
