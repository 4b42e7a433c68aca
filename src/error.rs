// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::api::Envelope;
use crate::database::StoreError;
use crate::services::ServiceError;
use crate::validation::ValidationErrors;

/// The only error type that reaches the wire.
///
/// Carries the HTTP status the failure was raised with and an ordered list of
/// client-facing messages. Rendering never alters the status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    messages: Vec<String>,
}

/// One entry of `data.errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorList {
    pub errors: Vec<ErrorDetail>,
}

impl ApiError {
    pub fn new(status: StatusCode, messages: Vec<String>) -> Self {
        let messages = if messages.is_empty() {
            vec![status.canonical_reason().unwrap_or("Unknown error").to_string()]
        } else {
            messages
        };
        Self { status, messages }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Convert to the `{ data: { errors: [...] } }` body.
    pub fn to_envelope(&self) -> Envelope<ErrorList> {
        Envelope::new(ErrorList {
            errors: self
                .messages
                .iter()
                .map(|m| ErrorDetail { message: m.clone() })
                .collect(),
        })
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, vec![message.into()])
    }

    pub fn bad_request_many(messages: Vec<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, messages)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, vec![message.into()])
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, vec![message.into()])
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, vec![message.into()])
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(err: ValidationErrors) -> Self {
        ApiError::bad_request_many(err.messages())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => ApiError::not_found(err.to_string()),
            StoreError::AlreadyExists { .. } | StoreError::Conflict { .. } => {
                ApiError::bad_request(err.to_string())
            }
            StoreError::ConfigMissing(what) => {
                tracing::error!("Store misconfigured: missing {}", what);
                ApiError::service_unavailable("Store is not configured")
            }
            StoreError::Database(db_err) => {
                // Log the real error but return generic message
                tracing::error!("Database error: {}", db_err);
                ApiError::internal_server_error("Database error occurred")
            }
            StoreError::Serialization(json_err) => {
                tracing::error!("Document serialization error: {}", json_err);
                ApiError::internal_server_error("Failed to process stored record")
            }
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => errors.into(),
            ServiceError::MissingReferent { .. } | ServiceError::Rule(_) => {
                ApiError::bad_request(err.to_string())
            }
            ServiceError::NotFound { .. } => ApiError::not_found(err.to_string()),
            ServiceError::Store(store_err) => store_err.into(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.messages.join("; "))
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self.to_envelope())).into_response()
    }
}
