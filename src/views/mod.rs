//! Read-only projections over the entity store, recomputed on every call.

pub mod aggregates;
pub mod filters;

pub use aggregates::{category_distribution, completed_revenue, count_by_role, count_by_status, CategoryShare};
pub use filters::{
    bookings_for_customer, bookings_for_provider, filter_services, services_for_provider, ServiceFilter,
};
