pub mod booking;
pub mod service;
pub mod user;

pub use booking::{Booking, BookingStatus, TIME_FORMAT};
pub use service::{Category, NewService, Service, ServicePatch};
pub use user::{Role, User};
