use axum::{extract::State, Json};

use crate::config::AppState;
use crate::dto::{CreateUserRequest, LoginRequest, LoginResponse};
use crate::interceptors::{ApiSuccess, AppError};
use crate::services::UserService;

/// Register a new user and sign them in
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<ApiSuccess<LoginResponse>, AppError> {
    let user_service = UserService::new(state);
    let response = user_service.register(request).await?;
    let message = response.message.clone();

    Ok(ApiSuccess::new(message, response))
}

/// Login user
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponse>, AppError> {
    let user_service = UserService::new(state);
    let response = user_service.login(request).await?;
    let message = response.message.clone();

    Ok(ApiSuccess::new(message, response))
}
