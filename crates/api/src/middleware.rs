use std::time::Instant;

use axum::{
    body::{Body, HttpBody},
    extract::Request,
    http::{header::CONTENT_LENGTH, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Largest request body buffered for logging (axum's default JSON limit).
pub const MAX_LOGGED_BODY: usize = 2 * 1024 * 1024;

/// Logs every request once it completes: method, uri, status, response
/// length, latency and the request body.
pub async fn request_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let (parts, body) = req.into_parts();
    let (res, logged_body) = match axum::body::to_bytes(body, MAX_LOGGED_BODY).await {
        Ok(bytes) => {
            let logged_body = body_for_log(&bytes);
            let req = axum::http::Request::from_parts(parts, Body::from(bytes));
            (next.run(req).await, logged_body)
        }
        Err(_) => (StatusCode::PAYLOAD_TOO_LARGE.into_response(), "-".to_string()),
    };

    tracing::info!(
        method = %method,
        uri = %uri,
        status = res.status().as_u16(),
        content_length = %response_length(&res),
        elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
        body = %logged_body,
        "request"
    );

    res
}

fn body_for_log(bytes: &[u8]) -> String {
    if bytes.is_empty() {
        "-".to_string()
    } else {
        String::from_utf8_lossy(bytes).into_owned()
    }
}

fn response_length(res: &Response) -> String {
    res.headers()
        .get(CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .or_else(|| res.body().size_hint().exact().map(|n| n.to_string()))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bodies_log_as_dash() {
        assert_eq!(body_for_log(b""), "-");
        assert_eq!(body_for_log(br#"{"name":"Mouse"}"#), r#"{"name":"Mouse"}"#);
    }

    #[test]
    fn response_length_prefers_header_then_body_size() {
        let res = axum::http::Response::builder()
            .header(CONTENT_LENGTH, "12")
            .body(Body::empty())
            .unwrap();
        assert_eq!(response_length(&res), "12");

        let res = Response::new(Body::from("hello"));
        assert_eq!(response_length(&res), "5");
    }
}
