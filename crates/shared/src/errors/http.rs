use crate::errors::error::{ErrorDetail, ErrorResponse};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

#[derive(Debug)]
pub enum HttpError {
    InvalidId(String),
    InvalidRequest(String),
    Validation {
        message: String,
        details: Option<Value>,
    },
    NotFound {
        code: &'static str,
        message: String,
    },
    /// Deadline hit on a read or create: 504.
    Timeout,
    /// Deadline hit on an update or delete: 408.
    RequestTimeout,
    OperationFailed {
        code: &'static str,
        message: String,
    },
    Internal(String),
    MethodNotAllowed,
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::InvalidId(_)
            | HttpError::InvalidRequest(_)
            | HttpError::Validation { .. }
            | HttpError::OperationFailed { .. } => StatusCode::BAD_REQUEST,
            HttpError::NotFound { .. } => StatusCode::NOT_FOUND,
            HttpError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            HttpError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            HttpError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            HttpError::InvalidId(_) => "INVALID_ID",
            HttpError::InvalidRequest(_) => "INVALID_REQUEST",
            HttpError::Validation { .. } => "VALIDATION_ERROR",
            HttpError::NotFound { code, .. } | HttpError::OperationFailed { code, .. } => *code,
            HttpError::Timeout => "TIMEOUT",
            HttpError::RequestTimeout => "TIMEOUT_ERROR",
            HttpError::Internal(_) => "INTERNAL_ERROR",
            HttpError::MethodNotAllowed => "METHOD_NOT_ALLOWED",
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code().to_string();

        let (message, details) = match self {
            HttpError::InvalidId(msg)
            | HttpError::InvalidRequest(msg)
            | HttpError::Internal(msg) => (msg, None),
            HttpError::Validation { message, details } => (message, details),
            HttpError::NotFound { message, .. } | HttpError::OperationFailed { message, .. } => {
                (message, None)
            }
            HttpError::Timeout => ("Request timeout".to_string(), None),
            HttpError::RequestTimeout => ("Request timed out".to_string(), None),
            HttpError::MethodNotAllowed => ("Method not allowed".to_string(), None),
        };

        let body = Json(ErrorResponse {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        });

        (status, body).into_response()
    }
}
