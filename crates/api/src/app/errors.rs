use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stockroom_core::DomainError;

/// Map a domain failure to the wire contract: a status code plus an
/// `{ "error": "<message>" }` body the client surfaces to the user.
pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::InsufficientAvailability(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "Item not found"),
        DomainError::Conflict(msg) => json_error(StatusCode::CONFLICT, msg),
        DomainError::Unauthorized(msg) => json_error(StatusCode::UNAUTHORIZED, msg),
    }
}

pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}
