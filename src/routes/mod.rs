use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::config::AppState;
use crate::handlers::{
    admin_dashboard, cancel_booking, create_booking, create_service, customer_dashboard, delete_service,
    delete_user, get_service, get_user, health_check, list_bookings, list_services, list_users, login,
    provider_dashboard, register, update_booking_status, update_service,
};
use crate::middleware::JwtMiddleware;

/// Create API router
pub fn create_router(state: AppState) -> Router {
    // Health check route (outside /api)
    let health_routes = Router::new()
        .route("/health", get(health_check));

    // Public API routes (no authentication required)
    let public_routes = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/services", get(list_services))
        .route("/services/:id", get(get_service));

    // Protected API routes (authentication required, role checks in services)
    let protected_routes = Router::new()
        .route("/user", get(get_user))
        .route("/services", post(create_service))
        .route("/services/:id", put(update_service).delete(delete_service))
        .route("/bookings", get(list_bookings).post(create_booking))
        .route("/bookings/:id/status", patch(update_booking_status))
        .route("/bookings/:id/cancel", post(cancel_booking))
        .route("/dashboard/customer", get(customer_dashboard))
        .route("/dashboard/provider", get(provider_dashboard))
        .route("/dashboard/admin", get(admin_dashboard))
        .route("/admin/users", get(list_users))
        .route("/admin/users/:id", delete(delete_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), JwtMiddleware::auth));

    // Combine routes
    Router::new()
        .merge(health_routes)
        .nest("/api", Router::new()
            .merge(public_routes)
            .merge(protected_routes)
        )
        .with_state(state)
}
