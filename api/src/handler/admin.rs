use axum::{
    extract::{rejection::JsonRejection, State},
    http::header,
    response::IntoResponse,
    Json,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use super::NO_STORE;
use crate::model::admin::{ResetRequest, ResetResponse};

pub(crate) const RESET_DONE: &str = "Base de données réinitialisée avec succès";

pub async fn reset_database(
    State(registry): State<AppRegistry>,
    payload: Result<Json<ResetRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(req) = payload.map_err(|e| AppError::MalformedRequest(e.body_text()))?;
    reset_with_password(&registry, &req.password).await?;

    Ok((
        [(header::CACHE_CONTROL, NO_STORE)],
        Json(ResetResponse {
            success: true,
            message: RESET_DONE.into(),
            timestamp: chrono::Utc::now().timestamp_millis(),
        }),
    ))
}

// パスワードが一致しない場合は何も触らずに終える
pub(crate) async fn reset_with_password(registry: &AppRegistry, password: &str) -> AppResult<()> {
    if !registry.admin_secret().verify(password) {
        tracing::warn!("admin reset rejected: wrong password");
        return Err(AppError::UnauthorizedError);
    }
    registry.reservation_repository().reset_all().await
}
