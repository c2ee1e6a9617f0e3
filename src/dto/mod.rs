pub mod booking_dto;
pub mod dashboard_dto;
pub mod service_dto;
pub mod user_dto;

pub use booking_dto::{CreateBookingRequest, UpdateBookingStatusRequest};
pub use dashboard_dto::{AdminDashboard, AdminSummary, CustomerDashboard, ProviderDashboard, ProviderSummary};
pub use service_dto::{CreateServiceRequest, ServiceQuery, UpdateServiceRequest};
pub use user_dto::{
    CreateUserRequest,
    LoginRequest,
    LoginResponse,
    UserResponse,
    UsersQuery,
};
