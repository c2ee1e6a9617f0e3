use axum::extract::State;
use serde_json::{json, Value};

use crate::config::AppState;
use crate::interceptors::{ApiSuccess, AppError};

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Result<ApiSuccess<Value>, AppError> {
    let store = state.store.read().await;
    let data = json!({
        "status": "ok",
        "timestamp": state.clock.now().to_rfc3339(),
        "users": store.users().len(),
        "services": store.services().len(),
        "bookings": store.bookings().len(),
    });

    Ok(ApiSuccess::new("Service is healthy", data))
}
