use axum::{
    extract::{Path, Query, State},
    Extension,
};

use crate::config::AppState;
use crate::dto::{UserResponse, UsersQuery};
use crate::interceptors::{ApiSuccess, AppError};
use crate::middleware::Claims;
use crate::services::UserService;

/// Admin listing of accounts, optionally by role
pub async fn list_users(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Query(query): Query<UsersQuery>,
) -> Result<ApiSuccess<Vec<UserResponse>>, AppError> {
    let users = UserService::new(state).list_users(&claims, query.role).await?;

    Ok(ApiSuccess::from_data(users))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<()>, AppError> {
    UserService::new(state).delete_user(&claims, &user_id).await?;

    Ok(ApiSuccess::<()>::new_without_data("User removed"))
}
