use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header::CONTENT_TYPE, Method, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

// Plain-text rejections are short; anything longer is replaced by the reason phrase.
const REJECTION_BODY_LIMIT: usize = 4 * 1024;

/// Rewrites framework-generated failures into the error envelope.
///
/// Axum answers 405, 413, 415 and query rejections with plain text. Any error
/// status whose body is not already JSON is re-rendered through [`ApiError`],
/// keeping the original status.
pub async fn normalize_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let response = next.run(request).await;

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || is_json(&response) {
        return response;
    }

    let (_, body) = response.into_parts();
    let text = match to_bytes(body, REJECTION_BODY_LIMIT).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).trim().to_string(),
        Err(_) => String::new(),
    };

    tracing::warn!("{} {} rejected with {}: {}", method, uri.path(), status.as_u16(), text);

    let messages = if text.is_empty() { Vec::new() } else { vec![text] };
    ApiError::new(status, messages).into_response()
}

fn is_json(response: &Response<Body>) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"))
}

/// Fallback for paths no route matches.
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::not_found(format!("Route {} {} not found", method, uri.path()))
}
