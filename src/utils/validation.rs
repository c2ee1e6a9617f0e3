use chrono::{NaiveDate, NaiveTime};
use validator::Validate;

use crate::interceptors::AppError;
use crate::models::TIME_FORMAT;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validate a request struct using validator
pub fn validate_request<T: Validate>(request: &T) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|e| {
            let mut errors = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<String> = errors
                        .iter()
                        .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
                        .collect();
                    format!("{}: {}", field, messages.join(", "))
                })
                .collect::<Vec<_>>();
            errors.sort();

            AppError::ValidationError(errors.join("; "))
        })
}

/// Parse a `YYYY-MM-DD` booking date
pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| AppError::ValidationError(format!("{}: expected a date as YYYY-MM-DD", field)))
}

/// Parse an `HH:MM` booking time
pub fn parse_time(field: &str, raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw.trim(), TIME_FORMAT)
        .map_err(|_| AppError::ValidationError(format!("{}: expected a time as HH:MM", field)))
}
