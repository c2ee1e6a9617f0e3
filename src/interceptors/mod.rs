pub mod response;
pub mod error;

pub use response::ApiSuccess;
pub use error::{AppError, AppResult};
