use axum::http::{header, HeaderName};

pub mod admin;
pub mod grid;
pub mod health;
pub mod page;
pub mod reservation;

pub(crate) const NO_STORE: &str = "no-store, no-cache, must-revalidate";

// 予約状況はリクエストごとに変わるため、途中のキャッシュにも保存させない
pub(crate) const NO_CACHE_HEADERS: [(HeaderName, &str); 3] = [
    (header::CACHE_CONTROL, NO_STORE),
    (header::PRAGMA, "no-cache"),
    (header::EXPIRES, "0"),
];
