use axum::{
    extract::{Path, State},
    Extension, Json,
};

use crate::config::AppState;
use crate::dto::{CreateBookingRequest, UpdateBookingStatusRequest};
use crate::interceptors::{ApiSuccess, AppError};
use crate::middleware::Claims;
use crate::models::Booking;
use crate::services::BookingService;

pub async fn create_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<ApiSuccess<Booking>, AppError> {
    let booking = BookingService::new(state).create(&claims, request).await?;

    Ok(ApiSuccess::new("Booking request sent successfully!", booking))
}

/// Bookings the caller made or received
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<ApiSuccess<Vec<Booking>>, AppError> {
    let bookings = BookingService::new(state).list_for(&claims).await?;

    Ok(ApiSuccess::from_data(bookings))
}

pub async fn update_booking_status(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<String>,
    Json(request): Json<UpdateBookingStatusRequest>,
) -> Result<ApiSuccess<Booking>, AppError> {
    let booking = BookingService::new(state)
        .update_status(&claims, &booking_id, request.status)
        .await?;

    Ok(ApiSuccess::new(format!("Booking {}", booking.status), booking))
}

pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(booking_id): Path<String>,
) -> Result<ApiSuccess<Booking>, AppError> {
    let booking = BookingService::new(state).cancel(&claims, &booking_id).await?;

    Ok(ApiSuccess::new("Booking cancelled", booking))
}
