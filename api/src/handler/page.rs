use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use garde::Validate;
use registry::AppRegistry;
use shared::error::AppError;

use super::{admin::reset_with_password, admin::RESET_DONE, NO_CACHE_HEADERS};
use crate::{
    model::{
        page::{AdminForm, BookingForm, Notice},
        reservation::ReserveRequest,
    },
    view::{admin_dashboard_page, admin_login_page, booking_page},
};

pub async fn show_booking_page(State(registry): State<AppRegistry>) -> Response {
    render_booking(&registry, &BookingForm::default(), None).await
}

// 予約に成功したら支払いリンクへ 303 で遷移する。失敗時は入力を保ったまま再表示
pub async fn submit_booking(
    State(registry): State<AppRegistry>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let form = match BookingForm::from_pairs(pairs) {
        Ok(form) => form,
        Err(e) => return render_booking(&registry, &BookingForm::default(), Some(failure(&e))).await,
    };
    if let Some(message) = form.missing_input() {
        let outcome = (StatusCode::BAD_REQUEST, Notice::error(message));
        return render_booking(&registry, &form, Some(outcome)).await;
    }

    let req = ReserveRequest::from(form.clone());
    let result = match req.validate(&()) {
        Ok(()) => registry.reservation_repository().create(req.into()).await,
        Err(report) => Err(AppError::from(report)),
    };

    match result {
        Ok(receipt) => {
            Redirect::to(&registry.payment().link_for(receipt.reserved_count)).into_response()
        }
        Err(e) => render_booking(&registry, &form, Some(failure(&e))).await,
    }
}

pub async fn show_admin_login() -> Response {
    (NO_CACHE_HEADERS, Html(admin_login_page(None))).into_response()
}

// 空でなければ管理画面を表示するだけ。実際の認可はリセット時にサーバー側で行う
pub async fn submit_admin_login(
    State(registry): State<AppRegistry>,
    Form(form): Form<AdminForm>,
) -> Response {
    if form.password.trim().is_empty() {
        let notice = Notice::error("Veuillez entrer un mot de passe");
        return (
            StatusCode::BAD_REQUEST,
            NO_CACHE_HEADERS,
            Html(admin_login_page(Some(&notice))),
        )
            .into_response();
    }
    render_dashboard(&registry, &form.password, None, false).await
}

pub async fn submit_admin_reset(
    State(registry): State<AppRegistry>,
    Form(form): Form<AdminForm>,
) -> Response {
    match reset_with_password(&registry, &form.password).await {
        Ok(()) => {
            let outcome = (StatusCode::OK, Notice::success(RESET_DONE));
            render_dashboard(&registry, &form.password, Some(outcome), true).await
        }
        // 認証状態を解除し、パスワード欄を空にしたログイン画面へ戻す
        Err(e @ AppError::UnauthorizedError) => {
            let (status, notice) = failure(&e);
            (status, NO_CACHE_HEADERS, Html(admin_login_page(Some(&notice)))).into_response()
        }
        Err(e) => render_dashboard(&registry, &form.password, Some(failure(&e)), false).await,
    }
}

fn failure(err: &AppError) -> (StatusCode, Notice) {
    let status = err.status_code();
    if let AppError::MalformedRequest(detail) = err {
        tracing::warn!(detail = %detail, "Malformed request rejected");
    }
    if status.is_server_error() {
        tracing::error!(
            error.cause_chain = ?err,
            error.message = %err,
            "Unexpected error happened"
        );
    }
    (status, Notice::error(err.public_message()))
}

async fn render_booking(
    registry: &AppRegistry,
    form: &BookingForm,
    outcome: Option<(StatusCode, Notice)>,
) -> Response {
    let (boxes, outcome) = match registry.grid_repository().find_all().await {
        Ok(boxes) => (boxes, outcome),
        Err(e) => (Vec::new(), Some(failure(&e))),
    };
    let (status, notice) = match outcome {
        Some((status, notice)) => (status, Some(notice)),
        None => (StatusCode::OK, None),
    };
    let html = booking_page(&boxes, form, notice.as_ref(), registry.payment().unit_price);
    (status, NO_CACHE_HEADERS, Html(html)).into_response()
}

async fn render_dashboard(
    registry: &AppRegistry,
    password: &str,
    outcome: Option<(StatusCode, Notice)>,
    return_home: bool,
) -> Response {
    let (boxes, outcome) = match registry.grid_repository().find_all().await {
        Ok(boxes) => (boxes, outcome),
        Err(e) => (Vec::new(), Some(failure(&e))),
    };
    let (status, notice) = match outcome {
        Some((status, notice)) => (status, Some(notice)),
        None => (StatusCode::OK, None),
    };
    let html = admin_dashboard_page(&boxes, password, notice.as_ref(), return_home);
    (status, NO_CACHE_HEADERS, Html(html)).into_response()
}
