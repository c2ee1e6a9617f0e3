use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use super::error::ErrorCode;

/// Body of every successful API call
#[derive(Debug, Serialize)]
pub struct ApiSuccess<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Body of every failed API call. The HTTP status travels alongside it.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    pub success: bool,
    pub message: String,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T: Serialize> ApiSuccess<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Acknowledge an action that has nothing to return
    pub fn new_without_data(message: impl Into<String>) -> ApiSuccess<()> {
        ApiSuccess {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn from_data(data: T) -> Self {
        Self::new("Success", data)
    }
}

impl ApiError {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            status: code.status(),
            success: false,
            message: message.into(),
            error: ErrorDetail {
                code: code.as_str(),
                details: None,
            },
        }
    }

    pub fn with_details(message: impl Into<String>, code: ErrorCode, details: Value) -> Self {
        let mut error = Self::new(message, code);
        error.error.details = Some(details);
        error
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
