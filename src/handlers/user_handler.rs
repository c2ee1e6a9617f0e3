use axum::{extract::State, Extension};

use crate::config::AppState;
use crate::dto::UserResponse;
use crate::interceptors::{ApiSuccess, AppError};
use crate::middleware::Claims;
use crate::services::UserService;

/// Get current user (from JWT token)
pub async fn get_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiSuccess<UserResponse>, AppError> {
    let user_service = UserService::new(state);
    let user = user_service.get_user_by_id(&claims.id).await?;

    Ok(ApiSuccess::new("User retrieved successfully", user))
}
