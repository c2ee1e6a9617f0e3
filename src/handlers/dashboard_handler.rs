use axum::{extract::State, Extension};

use crate::config::AppState;
use crate::dto::{AdminDashboard, CustomerDashboard, ProviderDashboard};
use crate::interceptors::{ApiSuccess, AppError};
use crate::middleware::Claims;
use crate::services::DashboardService;

pub async fn customer_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiSuccess<CustomerDashboard>, AppError> {
    let dashboard = DashboardService::new(state).customer(&claims).await?;

    Ok(ApiSuccess::new("Customer Dashboard", dashboard))
}

pub async fn provider_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiSuccess<ProviderDashboard>, AppError> {
    let dashboard = DashboardService::new(state).provider(&claims).await?;

    Ok(ApiSuccess::new("Partner Dashboard", dashboard))
}

pub async fn admin_dashboard(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiSuccess<AdminDashboard>, AppError> {
    let dashboard = DashboardService::new(state).admin(&claims).await?;

    Ok(ApiSuccess::new("Admin Portal", dashboard))
}
