use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Données manquantes")]
    ValidationError(#[from] garde::Report),
    #[error("Requête invalide")]
    MalformedRequest(String),
    #[error("La case {0} n'existe pas")]
    UnknownBox(i64),
    #[error("La case {0} est déjà réservée")]
    BoxAlreadyReserved(i64),
    #[error("Mot de passe incorrect")]
    UnauthorizedError,
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_)
            | AppError::MalformedRequest(_)
            | AppError::UnknownBox(_)
            | AppError::BoxAlreadyReserved(_) => StatusCode::BAD_REQUEST,
            AppError::UnauthorizedError => StatusCode::UNAUTHORIZED,
            AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    // クライアントに返してよいメッセージ。ストア由来のエラーの詳細は出さない
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "Erreur interne du serveur".into()
        } else {
            self.to_string()
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();
        if let AppError::MalformedRequest(detail) = &self {
            tracing::warn!(detail = %detail, "Malformed request rejected");
        }
        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happened"
            );
        }
        (
            status_code,
            Json(serde_json::json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
