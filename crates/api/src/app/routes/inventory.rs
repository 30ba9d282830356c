use std::sync::Arc;

use axum::{
    Json, Router,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/get_inventory", get(get_inventory))
        .route("/add_item", post(add_item))
        .route("/add_item_loan", post(add_item_loan))
        .route("/end_item_loan", post(end_item_loan))
        .route("/transaction/borrow", post(borrow_transaction))
}

pub async fn get_inventory(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let inventory = services.get_inventory();
    (
        StatusCode::OK,
        Json(serde_json::json!({ "inventory": inventory })),
    )
        .into_response()
}

pub async fn add_item(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AddItemRequest>,
) -> axum::response::Response {
    let item = match services.add_item(&body.description, body.quantity) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::item_envelope("Item added successfully", &item)),
    )
        .into_response()
}

pub async fn add_item_loan(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoanRequest>,
) -> axum::response::Response {
    let item = match services.add_item_loan(body.item_id, body.quantity) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::item_envelope("Item loaned successfully", &item)),
    )
        .into_response()
}

pub async fn end_item_loan(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ReturnRequest>,
) -> axum::response::Response {
    let item = match services.end_item_loan(body.item_id, body.quantity) {
        Ok(item) => item,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (
        StatusCode::OK,
        Json(dto::item_envelope("Item returned successfully", &item)),
    )
        .into_response()
}

/// Acknowledge a borrow transaction without recording it anywhere.
///
/// The client posts here after a successful loan; the message text (typo
/// included) is part of the contract it asserts on.
pub async fn borrow_transaction(
    Json(_body): Json<serde_json::Value>,
) -> axum::response::Response {
    (
        StatusCode::OK,
        Json(serde_json::json!({ "message": "Transaction added succesfully" })),
    )
        .into_response()
}
