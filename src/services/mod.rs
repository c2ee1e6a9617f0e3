pub mod booking_service;
pub mod catalog_service;
pub mod dashboard_service;
pub mod user_service;

pub use booking_service::BookingService;
pub use catalog_service::CatalogService;
pub use dashboard_service::DashboardService;
pub use user_service::UserService;
