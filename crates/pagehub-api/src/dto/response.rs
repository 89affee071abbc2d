//! The response envelope every handler writes.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// `{success, status, message, data?, error?}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    /// Whether the request was successful.
    pub success: bool,
    /// HTTP status, repeated in the body.
    pub status: u16,
    /// Localized, human-readable outcome.
    pub message: String,
    /// Payload; omitted when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Failure detail; omitted on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: true,
            status: status.as_u16(),
            message: message.into(),
            data,
            error: None,
        }
    }

    fn failure(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            success: false,
            status: status.as_u16(),
            message: message.into(),
            data,
            error: status.canonical_reason().map(str::to_string),
        }
    }

    /// 200 with a payload.
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::OK, message, Some(data))
    }

    /// 201 with the created resource.
    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self::success(StatusCode::CREATED, message, Some(data))
    }

    /// 400; `detail` lands in `data`.
    pub fn bad_request(message: impl Into<String>, detail: Option<T>) -> Self {
        Self::failure(StatusCode::BAD_REQUEST, message, detail)
    }

    /// HTTP status of this envelope.
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl ApiResponse {
    /// 200 without a payload.
    pub fn ok_message(message: impl Into<String>) -> Self {
        Self::success(StatusCode::OK, message, None)
    }

    /// 204; message only.
    pub fn no_content(message: impl Into<String>) -> Self {
        Self::success(StatusCode::NO_CONTENT, message, None)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::UNAUTHORIZED, message, None)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::FORBIDDEN, message, None)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::NOT_FOUND, message, None)
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::failure(StatusCode::INTERNAL_SERVER_ERROR, message, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
