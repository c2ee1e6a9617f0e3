use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use thiserror::Error;
use serde_json::json;

use super::response::ApiError;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("JWT error: {0}")]
    JwtError(#[from] jsonwebtoken::errors::Error),
}

/// Error codes for API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SeedError,
    ValidationError,
    NotFound,
    InternalError,
    BadRequest,
    Unauthorized,
    Forbidden,
    Conflict,
    JwtError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::SeedError => "SEED_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::JwtError => "JWT_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ErrorCode::SeedError | ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorCode::ValidationError | ErrorCode::BadRequest => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unauthorized | ErrorCode::JwtError => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::Conflict => StatusCode::CONFLICT,
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::SeedError(_) => ErrorCode::SeedError,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
            AppError::InternalError(_) => ErrorCode::InternalError,
            AppError::BadRequest(_) => ErrorCode::BadRequest,
            AppError::Unauthorized(_) => ErrorCode::Unauthorized,
            AppError::Forbidden(_) => ErrorCode::Forbidden,
            AppError::Conflict(_) => ErrorCode::Conflict,
            AppError::JwtError(_) => ErrorCode::JwtError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.error_code().status()
    }

    pub fn to_api_error(&self) -> ApiError {
        let message = self.to_string();

        match self {
            AppError::ValidationError(msg) => ApiError::with_details(
                message,
                self.error_code(),
                json!({ "validation_errors": msg }),
            ),
            _ => ApiError::new(message, self.error_code()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Only server faults are logged at error level
        if self.status_code().is_server_error() {
            tracing::error!("Application error: {:?}", self);
        } else {
            tracing::warn!("Request rejected: {}", self);
        }

        self.to_api_error().into_response()
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_maps_to_409_with_code() {
        let err = AppError::Conflict("Email already exists".to_string());
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
        assert_eq!(err.error_code().as_str(), "CONFLICT");
    }

    #[test]
    fn validation_error_carries_details() {
        let api = AppError::ValidationError("price: must not be negative".to_string()).to_api_error();
        assert_eq!(api.status(), StatusCode::BAD_REQUEST);
        assert_eq!(api.error.code, "VALIDATION_ERROR");
        assert_eq!(
            api.error.details.expect("details")["validation_errors"],
            "price: must not be negative"
        );
    }

    #[test]
    fn into_response_uses_variant_status() {
        let response = AppError::Forbidden("Admins only".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
