use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::reservation::{ReserveRequest, ReserveResponse};

pub async fn reserve_boxes(
    State(registry): State<AppRegistry>,
    payload: Result<Json<ReserveRequest>, JsonRejection>,
) -> AppResult<Json<ReserveResponse>> {
    let Json(req) = payload.map_err(|e| AppError::MalformedRequest(e.body_text()))?;
    req.validate(&())?;

    registry
        .reservation_repository()
        .create(req.into())
        .await
        .map(|receipt| Json(ReserveResponse::confirmed(receipt.reserved_count)))
}

#[cfg(test)]
mod tests {
    use crate::test_util::{read_json, request, test_app};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::ServiceExt;

    #[sqlx::test(migrations = "../adapter/migrations")]
    async fn reserves_and_lists_alice(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let app = test_app(pool);

        let res = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/reserve",
                Some(json!({"name": "Alice", "phone": "0600000000", "selectedBoxes": [3, 7]})),
            ))
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
        let body = read_json(res).await?;
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Réservation confirmée pour 2 case(s)");

        let res = app.oneshot(request(Method::GET, "/api/boxes", None)).await?;
        let body = read_json(res).await?;
        for b in body["boxes"].as_array().unwrap() {
            let n = b["number"].as_i64().unwrap();
            if n == 3 || n == 7 {
                assert_eq!(b["reserved"], true);
                assert_eq!(b["user_name"], "Alice");
                assert_eq!(b["user_phone"], "0600000000");
            } else {
                assert_eq!(b["reserved"], false);
            }
        }
        Ok(())
    }

    #[sqlx::test(migrations = "../adapter/migrations")]
    async fn conflict_names_the_box_and_keeps_owner(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let app = test_app(pool);

        let res = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/reserve",
                Some(json!({"name": "Owner", "phone": "0611", "selectedBoxes": [5]})),
            ))
            .await?;
        assert_eq!(res.status(), StatusCode::OK);

        let res = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/api/reserve",
                Some(json!({"name": "Other", "phone": "0622", "selectedBoxes": [4, 5]})),
            ))
            .await?;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = read_json(res).await?;
        assert_eq!(body["error"], "La case 5 est déjà réservée");

        let res = app.oneshot(request(Method::GET, "/api/boxes", None)).await?;
        let body = read_json(res).await?;
        assert_eq!(body["boxes"][4]["user_name"], "Owner");
        assert_eq!(body["boxes"][3]["reserved"], false);
        Ok(())
    }

    #[sqlx::test(migrations = "../adapter/migrations")]
    async fn rejects_incomplete_requests(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let app = test_app(pool);

        for payload in [
            json!({"phone": "0600", "selectedBoxes": [1]}),
            json!({"name": "Alice", "phone": "", "selectedBoxes": [1]}),
            json!({"name": "Alice", "phone": "0600", "selectedBoxes": []}),
            json!({"name": "Alice", "phone": "0600"}),
            json!({"name": "Alice", "phone": "0600", "selectedBoxes": [13]}),
            json!({"name": null, "phone": "0600", "selectedBoxes": [1]}),
            json!({"name": "Alice", "phone": null, "selectedBoxes": [1]}),
            json!({"name": "Alice", "phone": "0600", "selectedBoxes": null}),
        ] {
            let res = app
                .clone()
                .oneshot(request(Method::POST, "/api/reserve", Some(payload)))
                .await?;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            let body = read_json(res).await?;
            assert_eq!(body["error"], "Données manquantes");
        }

        let boxes = read_json(app.oneshot(request(Method::GET, "/api/boxes", None)).await?).await?;
        assert!(boxes["boxes"]
            .as_array()
            .is_some_and(|all| all.iter().all(|b| b["reserved"] == false)));
        Ok(())
    }

    #[sqlx::test(migrations = "../adapter/migrations")]
    async fn broken_json_gets_a_fixed_message(pool: sqlx::SqlitePool) -> anyhow::Result<()> {
        let app = test_app(pool);

        for payload in [json!({"name": 42}), json!({"selectedBoxes": "1"}), json!("Alice")] {
            let res = app
                .clone()
                .oneshot(request(Method::POST, "/api/reserve", Some(payload)))
                .await?;
            assert_eq!(res.status(), StatusCode::BAD_REQUEST);
            let body = read_json(res).await?;
            assert_eq!(body["error"], "Requête invalide");
        }
        Ok(())
    }
}
