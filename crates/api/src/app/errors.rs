use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use catalog_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match &err {
        // An id that does not parse cannot match any product.
        DomainError::NotFound | DomainError::InvalidId(_) => {
            json_error(StatusCode::NOT_FOUND, DomainError::NotFound.to_string())
        }
        DomainError::InvalidInput | DomainError::DuplicateName => {
            json_error(StatusCode::BAD_REQUEST, err.to_string())
        }
        DomainError::IdsExhausted => json_error(StatusCode::SERVICE_UNAVAILABLE, err.to_string()),
    }
}

/// `{"error": message}` body with the given status.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_statuses() {
        let cases = [
            (DomainError::NotFound, StatusCode::NOT_FOUND),
            (DomainError::invalid_id("x"), StatusCode::NOT_FOUND),
            (DomainError::InvalidInput, StatusCode::BAD_REQUEST),
            (DomainError::DuplicateName, StatusCode::BAD_REQUEST),
            (DomainError::IdsExhausted, StatusCode::SERVICE_UNAVAILABLE),
        ];

        for (err, status) in cases {
            assert_eq!(domain_error_to_response(err).status(), status);
        }
    }
}
