use axum::{
    Router,
    routing::{get, post},
};

pub mod auth;
pub mod inventory;
pub mod system;

/// Router for the full wire contract: auth endpoints at the root, inventory
/// endpoints under `/api`.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/login", post(auth::login))
        .route("/signup", post(auth::signup))
        .nest("/api", inventory::router())
}
