//! HTTP API application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: infrastructure wiring (store adapter selection, service construction)
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request/response DTOs and mapping to/from domain types
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// Reads `DATABASE_URL` to choose the store adapter; see
/// [`services::build_services`].
pub async fn build_app() -> Router {
    let services = Arc::new(services::build_services().await);
    build_app_with_services(services)
}

/// Build the router around already-constructed services.
///
/// Split out so tests can wire a deterministic in-memory store explicitly.
pub fn build_app_with_services(services: Arc<services::AppServices>) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api/products", routes::products::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}
