//! HTTP API application wiring (Axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use catalog_products::ProductRepository;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Repository handle shared by every handler.
pub type SharedRepository = Arc<dyn ProductRepository>;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(repository: SharedRepository) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(middleware::request_log))
                .layer(Extension(repository)),
        )
}
