use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use crate::api::{Envelope, Payload};
use crate::error::ApiError;

/// Body carried by an [`ApiResponse`].
#[derive(Debug)]
enum Body<T> {
    Plain(T),
    Enveloped(Envelope<T>),
}

/// Success response; always rendered as `{ "data": ... }`.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    body: Body<T>,
    status_code: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 OK with a plain body that still needs wrapping
    pub fn success(data: T) -> Self {
        Self::with_status(data, StatusCode::OK)
    }

    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            body: Body::Plain(data),
            status_code,
        }
    }

    /// 201 Created
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    /// Body the handler already enveloped; passed through without a second wrap.
    pub fn enveloped(envelope: Envelope<T>, status_code: StatusCode) -> Self {
        Self {
            body: Body::Enveloped(envelope),
            status_code,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status_code
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let payload = match self.body {
            Body::Plain(data) => serde_json::to_value(&data).map(Payload::Plain),
            Body::Enveloped(envelope) => serde_json::to_value(&envelope.data).map(Payload::Enveloped),
        };

        match payload {
            Ok(payload) => (self.status_code, Json(payload.into_envelope())).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                ApiError::internal_server_error("Failed to serialize response data").into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;
