pub mod admin_handler;
pub mod auth_handler;
pub mod booking_handler;
pub mod dashboard_handler;
pub mod health_handler;
pub mod service_handler;
pub mod user_handler;

pub use admin_handler::{delete_user, list_users};
pub use auth_handler::{login, register};
pub use booking_handler::{cancel_booking, create_booking, list_bookings, update_booking_status};
pub use dashboard_handler::{admin_dashboard, customer_dashboard, provider_dashboard};
pub use health_handler::health_check;
pub use service_handler::{create_service, delete_service, get_service, list_services, update_service};
pub use user_handler::get_user;
