//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared in-memory state (inventory store + user directory)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router over the seeded mock dataset (public
/// entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    build_app_with(services::AppServices::seeded())
}

/// Build the router over explicit state (tests use this to start empty).
pub fn build_app_with(services: services::AppServices) -> Router {
    routes::router().layer(ServiceBuilder::new().layer(Extension(Arc::new(services))))
}
