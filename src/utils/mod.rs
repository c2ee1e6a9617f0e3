pub mod clock;
pub mod password;
pub mod validation;

pub use clock::{Clock, SystemClock};
pub use password::{hash_password, verify_password};
pub use validation::{parse_date, parse_time, validate_request};

#[cfg(test)]
pub use clock::MockClock;
