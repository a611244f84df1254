use axum::{extract::State, response::IntoResponse, Json};
use registry::AppRegistry;
use shared::error::AppResult;

use super::NO_CACHE_HEADERS;
use crate::model::grid::BoxesResponse;

pub async fn show_box_list(State(registry): State<AppRegistry>) -> AppResult<impl IntoResponse> {
    registry
        .grid_repository()
        .find_all()
        .await
        .map(BoxesResponse::from)
        .map(|res| (NO_CACHE_HEADERS, Json(res)))
}

#[cfg(test)]
mod tests {
    use crate::test_util::{read_json, request, test_app};
    use axum::http::{header, Method, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    #[sqlx::test(migrations = "../adapter/migrations")]
    async fn lists_boxes_without_caching(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let res = test_app(pool)
            .oneshot(request(Method::GET, "/api/boxes", None))
            .await?;

        assert_eq!(res.status(), StatusCode::OK);
        let headers = res.headers();
        assert_eq!(
            headers[header::CACHE_CONTROL],
            "no-store, no-cache, must-revalidate"
        );
        assert_eq!(headers[header::PRAGMA], "no-cache");
        assert_eq!(headers[header::EXPIRES], "0");

        let body = read_json(res).await?;
        let boxes = body["boxes"].as_array().unwrap();
        assert_eq!(boxes.len(), 12);
        assert_eq!(boxes[0]["number"], 1);
        assert_eq!(boxes[0]["reserved"], false);
        assert_eq!(boxes[0]["user_name"], Value::Null);
        assert_eq!(boxes[0]["user_phone"], Value::Null);
        assert!(boxes[0]["id"].is_i64());
        Ok(())
    }

    #[sqlx::test(migrations = "../adapter/migrations")]
    async fn store_failure_is_generic(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let app = test_app(pool.clone());
        pool.close().await;

        let res = app.oneshot(request(Method::GET, "/api/boxes", None)).await?;
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = read_json(res).await?;
        assert_eq!(body["error"], "Erreur interne du serveur");
        Ok(())
    }
}
