use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn login(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    let profile = match services.login(&body.username, &body.password) {
        Ok(profile) => profile,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (StatusCode::OK, Json(dto::user_to_json(&profile))).into_response()
}

pub async fn signup(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SignupRequest>,
) -> axum::response::Response {
    let profile = match services.signup(&body.username, &body.email, &body.password) {
        Ok(profile) => profile,
        Err(e) => return errors::domain_error_to_response(e),
    };

    (StatusCode::OK, Json(dto::user_to_json(&profile))).into_response()
}
