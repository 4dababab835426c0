use axum::Router;

pub mod products;
pub mod system;

/// Router for the `/api` tree.
pub fn router() -> Router {
    Router::new().nest("/products", products::router())
}
