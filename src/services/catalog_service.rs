use crate::config::AppState;
use crate::dto::{CreateServiceRequest, ServiceQuery, UpdateServiceRequest};
use crate::interceptors::AppError;
use crate::middleware::Claims;
use crate::models::{Category, Role, Service};
use crate::utils::validate_request;
use crate::views::{filter_services, ServiceFilter};

const ALL_CATEGORIES: &str = "All";

/// Browsing and provider-side management of the service catalog
#[derive(Clone)]
pub struct CatalogService {
    state: AppState,
}

impl CatalogService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Filtered catalog listing
    pub async fn list(&self, query: ServiceQuery) -> Result<Vec<Service>, AppError> {
        let filter = parse_filter(query)?;
        let store = self.state.store.read().await;

        Ok(filter_services(store.services(), &filter)
            .into_iter()
            .cloned()
            .collect())
    }

    pub async fn get(&self, service_id: &str) -> Result<Service, AppError> {
        let store = self.state.store.read().await;
        store
            .find_service(service_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
    }

    /// List a new service under the acting provider's identity
    pub async fn create(&self, actor: &Claims, mut request: CreateServiceRequest) -> Result<Service, AppError> {
        actor.require_role(&[Role::Provider, Role::Admin])?;
        request.image = non_empty(request.image);
        validate_request(&request)?;

        let mut store = self.state.store.write().await;
        let provider_name = store
            .find_user(&actor.id)
            .map(|u| u.name.clone())
            .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))?;

        let service = Service::new(actor.id.clone(), provider_name, request.into_new_service());
        let created = store.insert_service(service);
        tracing::info!(service_id = %created.id, provider_id = %created.provider_id, "Service created");

        Ok(created.clone())
    }

    /// Merge the provided fields over an existing service
    pub async fn update(
        &self,
        actor: &Claims,
        service_id: &str,
        request: UpdateServiceRequest,
    ) -> Result<Service, AppError> {
        actor.require_role(&[Role::Provider, Role::Admin])?;
        // An explicit empty image resets to the default, so only URLs are checked
        validate_request(&UpdateServiceRequest {
            image: non_empty(request.image.clone()),
            ..request.clone()
        })?;

        let mut store = self.state.store.write().await;
        let existing = store
            .find_service(service_id)
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;
        ensure_owner(actor, existing)?;

        let updated = store.update_service(service_id, request.into_patch())?;
        tracing::info!(service_id, "Service updated");

        Ok(updated.clone())
    }

    /// Remove a service. Deleting an id that is already gone succeeds and
    /// returns `false`; bookings that reference it are kept.
    pub async fn delete(&self, actor: &Claims, service_id: &str) -> Result<bool, AppError> {
        actor.require_role(&[Role::Provider, Role::Admin])?;

        let mut store = self.state.store.write().await;
        match store.find_service(service_id) {
            Some(existing) => ensure_owner(actor, existing)?,
            None => return Ok(false),
        }

        let removed = store.remove_service(service_id);
        tracing::info!(service_id, "Service deleted");

        Ok(removed)
    }
}

fn parse_filter(query: ServiceQuery) -> Result<ServiceFilter, AppError> {
    let category = match query.category.as_deref().map(str::trim) {
        None | Some("") | Some(ALL_CATEGORIES) => None,
        Some(label) => Some(
            Category::from_label(label)
                .ok_or_else(|| AppError::ValidationError(format!("category: unknown category '{}'", label)))?,
        ),
    };

    Ok(ServiceFilter {
        category,
        search: query.search.unwrap_or_default(),
    })
}

fn ensure_owner(actor: &Claims, service: &Service) -> Result<(), AppError> {
    if actor.role == Role::Admin || service.provider_id == actor.id {
        Ok(())
    } else {
        Err(AppError::Forbidden("Only the owning provider can change this service".to_string()))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
