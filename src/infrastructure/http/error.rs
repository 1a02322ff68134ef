//! HTTP Error Handling
//!
//! 错误以 `{"error": <kind>, "message": <string>}` 返回，并使用真实 HTTP 状态码

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::dto::ErrorResponse;
use crate::application::ApplicationError;

/// API 错误
#[derive(Debug)]
pub struct ApiError(pub ApplicationError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.0.kind();
        let message = self.0.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %kind, message = %message, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %kind, message = %message, "Request rejected");
        }

        (status, Json(ErrorResponse::new(kind, message))).into_response()
    }
}
