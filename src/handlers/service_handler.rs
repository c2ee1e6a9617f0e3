use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::config::AppState;
use crate::dto::{CreateServiceRequest, ServiceQuery, UpdateServiceRequest};
use crate::interceptors::{ApiSuccess, AppError};
use crate::middleware::Claims;
use crate::models::Service;
use crate::services::CatalogService;

/// Browse the catalog by category and search term
pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceQuery>,
) -> Result<ApiSuccess<Vec<Service>>, AppError> {
    let services = CatalogService::new(state).list(query).await?;

    Ok(ApiSuccess::from_data(services))
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
) -> Result<ApiSuccess<Service>, AppError> {
    let service = CatalogService::new(state).get(&service_id).await?;

    Ok(ApiSuccess::from_data(service))
}

pub async fn create_service(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateServiceRequest>,
) -> Result<ApiSuccess<Service>, AppError> {
    let service = CatalogService::new(state).create(&claims, request).await?;

    Ok(ApiSuccess::new("Service created successfully!", service))
}

pub async fn update_service(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(service_id): Path<String>,
    Json(request): Json<UpdateServiceRequest>,
) -> Result<ApiSuccess<Service>, AppError> {
    let service = CatalogService::new(state)
        .update(&claims, &service_id, request)
        .await?;

    Ok(ApiSuccess::new("Service updated successfully!", service))
}

pub async fn delete_service(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(service_id): Path<String>,
) -> Result<ApiSuccess<()>, AppError> {
    CatalogService::new(state).delete(&claims, &service_id).await?;

    Ok(ApiSuccess::<()>::new_without_data("Service deleted successfully"))
}
