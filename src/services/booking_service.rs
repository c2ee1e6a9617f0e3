use crate::config::AppState;
use crate::dto::CreateBookingRequest;
use crate::interceptors::AppError;
use crate::middleware::Claims;
use crate::models::{Booking, BookingStatus, Role};
use crate::utils::{parse_date, parse_time, validate_request};
use crate::views::{bookings_for_customer, bookings_for_provider};

#[derive(Clone)]
pub struct BookingService {
    state: AppState,
}

impl BookingService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Request an appointment; title and price are captured now and stay fixed
    pub async fn create(&self, actor: &Claims, request: CreateBookingRequest) -> Result<Booking, AppError> {
        actor.require_role(&[Role::User])?;
        validate_request(&request)?;

        let date = parse_date("date", &request.date)?;
        let time = parse_time("time", &request.time)?;
        let notes = request.notes.filter(|n| !n.trim().is_empty());

        let mut store = self.state.store.write().await;
        let customer = store
            .find_user(&actor.id)
            .cloned()
            .ok_or_else(|| AppError::Unauthorized("Account no longer exists".to_string()))?;
        let service = store
            .find_service(&request.service_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        let booking = store.insert_booking(Booking::new(&customer, &service, date, time, notes));
        tracing::info!(
            booking_id = %booking.id,
            service_id = %booking.service_id,
            user_id = %booking.user_id,
            "Booking requested"
        );

        Ok(booking.clone())
    }

    /// Bookings the caller is party to: made as a customer, received as a
    /// provider, or every booking for an admin
    pub async fn list_for(&self, actor: &Claims) -> Result<Vec<Booking>, AppError> {
        let store = self.state.store.read().await;
        let bookings = match actor.role {
            Role::User => bookings_for_customer(store.bookings(), &actor.id),
            Role::Provider => bookings_for_provider(store.bookings(), &actor.id),
            Role::Admin => store.bookings().iter().collect(),
        };

        Ok(bookings.into_iter().cloned().collect())
    }

    /// Set any status from any status. Only the booking's customer, its
    /// provider or an admin may do so.
    pub async fn update_status(
        &self,
        actor: &Claims,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let mut store = self.state.store.write().await;
        let booking = store
            .find_booking(booking_id)
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        let is_party = booking.user_id == actor.id || booking.provider_id == actor.id;
        if !is_party && actor.role != Role::Admin {
            return Err(AppError::Forbidden("Not a party to this booking".to_string()));
        }

        let previous = booking.status;
        let updated = store.set_booking_status(booking_id, status)?;
        tracing::info!(booking_id, from = %previous, to = %status, actor_id = %actor.id, "Booking status changed");

        Ok(updated.clone())
    }

    /// Customer-side cancellation
    pub async fn cancel(&self, actor: &Claims, booking_id: &str) -> Result<Booking, AppError> {
        self.update_status(actor, booking_id, BookingStatus::Cancelled).await
    }
}
