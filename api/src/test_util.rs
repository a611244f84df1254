use adapter::database::ConnectionPool;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
    response::Response,
    Router,
};
use registry::AppRegistry;
use shared::config::{AdminConfig, AppConfig, DatabaseConfig, PaymentConfig, ServerConfig};

use crate::route::build_routers;

pub const ADMIN_PASSWORD: &str = "test-admin-secret";
pub const PAYMENT_LINK_BASE: &str = "https://pay.example/lotry";

pub fn test_app(pool: sqlx::SqlitePool) -> Router {
    let config = AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".into(),
        },
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        admin: AdminConfig {
            secret: ADMIN_PASSWORD.into(),
        },
        payment: PaymentConfig {
            link_base: PAYMENT_LINK_BASE.into(),
            unit_price: 2,
        },
    };
    let registry = AppRegistry::new(ConnectionPool::new(pool), config);
    build_routers().with_state(registry)
}

pub fn request(method: Method, uri: &str, body: Option<serde_json::Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    };
    req.unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

pub async fn read_text(res: Response) -> anyhow::Result<String> {
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    Ok(String::from_utf8(bytes.to_vec())?)
}

pub async fn read_json(res: Response) -> anyhow::Result<serde_json::Value> {
    let bytes = to_bytes(res.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}
