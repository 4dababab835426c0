use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use catalog_core::ProductId;
use catalog_products::CreateProduct;

use crate::app::{dto, errors, SharedRepository};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/:id", get(get_product).delete(delete_product))
}

pub async fn list_products(
    Extension(repository): Extension<SharedRepository>,
) -> axum::response::Response {
    let items = dto::products_to_json(&repository.list());
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_product(
    Extension(repository): Extension<SharedRepository>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match id.parse::<ProductId>().and_then(|id| repository.get(id)) {
        Ok(product) => (StatusCode::OK, Json(dto::ProductResponse::from(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(repository): Extension<SharedRepository>,
    Path(id): Path<String>,
) -> axum::response::Response {
    match id.parse::<ProductId>().and_then(|id| repository.delete(id)) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn create_product(
    Extension(repository): Extension<SharedRepository>,
    Json(body): Json<dto::CreateProductRequest>,
) -> axum::response::Response {
    let cmd = match CreateProduct::try_from(body) {
        Ok(cmd) => cmd,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, msg),
    };

    match repository.create(cmd) {
        Ok(product) => (StatusCode::CREATED, Json(dto::ProductResponse::from(&product))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use catalog_products::InMemoryProductRepository;
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        let repository: SharedRepository = Arc::new(InMemoryProductRepository::seeded());
        router().layer(Extension(repository))
    }

    async fn body_json(res: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn non_numeric_id_is_not_found() {
        let res = app()
            .oneshot(Request::get("/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(res).await, serde_json::json!({"error": "Product not found"}));
    }

    #[tokio::test]
    async fn integral_decimal_id_matches() {
        let res = app()
            .oneshot(Request::get("/2.0").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["name"], "Smartphone");
    }

    #[tokio::test]
    async fn radix_literal_id_matches() {
        for path in ["/0x3", "/0b11", "/0o3"] {
            let res = app()
                .oneshot(Request::get(path).body(Body::empty()).unwrap())
                .await
                .unwrap();

            assert_eq!(res.status(), StatusCode::OK, "path {path}");
            assert_eq!(body_json(res).await["name"], "Headphones");
        }
    }

    #[tokio::test]
    async fn create_with_wrong_typed_price_is_bad_request() {
        let req = Request::post("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Mouse","price":"12"}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(res).await, serde_json::json!({"error": "price must be a number"}));
    }

    #[tokio::test]
    async fn create_with_missing_price_is_bad_request() {
        let req = Request::post("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Mouse"}"#))
            .unwrap();
        let res = app().oneshot(req).await.unwrap();

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(res).await,
            serde_json::json!({"error": "Name and price are required"})
        );
    }
}
