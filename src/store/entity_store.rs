use crate::interceptors::{AppError, AppResult};
use crate::models::{Booking, BookingStatus, Service, ServicePatch, User};
use crate::utils::verify_password;

/// In-memory holder of users, services and bookings.
///
/// Collections keep insertion order. Nothing here checks cross references:
/// a service may name a provider that does not exist and deleting a service
/// or user leaves dependent bookings in place.
#[derive(Debug, Default)]
pub struct EntityStore {
    users: Vec<User>,
    services: Vec<Service>,
    bookings: Vec<Booking>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn find_user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn find_service(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.id == id)
    }

    pub fn find_booking(&self, id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Append a user, rejecting an email that is already registered
    pub fn insert_user(&mut self, user: User) -> AppResult<&User> {
        if self.find_user_by_email(&user.email).is_some() {
            return Err(AppError::Conflict("Email already exists".to_string()));
        }

        let index = self.users.len();
        self.users.push(user);
        Ok(&self.users[index])
    }

    /// Exact email match plus password check; both failures look the same
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<&User> {
        let user = self
            .find_user_by_email(email)
            .ok_or_else(|| AppError::Unauthorized("Invalid credentials".to_string()))?;

        if !verify_password(password, &user.password_hash)? {
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        Ok(user)
    }

    /// Remove a user by id. Returns whether anything was removed.
    pub fn remove_user(&mut self, id: &str) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        self.users.len() != before
    }

    pub fn insert_service(&mut self, service: Service) -> &Service {
        let index = self.services.len();
        self.services.push(service);
        &self.services[index]
    }

    pub fn update_service(&mut self, id: &str, patch: ServicePatch) -> AppResult<&Service> {
        let service = self
            .services
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::NotFound("Service not found".to_string()))?;

        service.apply(patch);
        Ok(&*service)
    }

    /// Remove a service by id. Returns whether anything was removed.
    pub fn remove_service(&mut self, id: &str) -> bool {
        let before = self.services.len();
        self.services.retain(|s| s.id != id);
        self.services.len() != before
    }

    pub fn insert_booking(&mut self, booking: Booking) -> &Booking {
        let index = self.bookings.len();
        self.bookings.push(booking);
        &self.bookings[index]
    }

    /// Unconditional status set; no transition table applies
    pub fn set_booking_status(&mut self, id: &str, status: BookingStatus) -> AppResult<&Booking> {
        let booking = self
            .bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        booking.status = status;
        Ok(&*booking)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};

    use super::*;
    use crate::models::{Category, NewService, Role};
    use crate::utils::hash_password;

    fn user(name: &str, email: &str, role: Role) -> User {
        User::new(
            name.to_string(),
            email.to_string(),
            hash_password("hunter22", 4).unwrap(),
            role,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
    }

    fn service_for(provider: &User, price: f64) -> Service {
        Service::new(
            provider.id.clone(),
            provider.name.clone(),
            NewService {
                title: "Ceiling Fan Install".to_string(),
                category: Category::Electrical,
                description: "Mount and wire one fan".to_string(),
                price,
                duration: "90 minutes".to_string(),
                image: None,
            },
        )
    }

    #[test]
    fn duplicate_email_is_a_conflict() {
        let mut store = EntityStore::new();
        store.insert_user(user("Ana", "ana@demo.com", Role::User)).unwrap();

        let err = store.insert_user(user("Ana Two", "ana@demo.com", Role::Provider)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(store.users().len(), 1);
    }

    #[test]
    fn authenticate_requires_both_fields_to_match() {
        let mut store = EntityStore::new();
        store.insert_user(user("Ana", "ana@demo.com", Role::User)).unwrap();

        assert!(store.authenticate("ana@demo.com", "hunter22").is_ok());
        assert!(matches!(
            store.authenticate("ana@demo.com", "hunter2"),
            Err(AppError::Unauthorized(_))
        ));
        assert!(matches!(
            store.authenticate("ANA@demo.com", "hunter22"),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn removing_a_service_twice_is_a_no_op() {
        let mut store = EntityStore::new();
        let provider = user("Mike", "mike@demo.com", Role::Provider);
        let keep = store.insert_service(service_for(&provider, 30.0)).id.clone();
        let drop = store.insert_service(service_for(&provider, 40.0)).id.clone();

        assert!(store.remove_service(&drop));
        assert!(!store.remove_service(&drop));
        let ids: Vec<&str> = store.services().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec![keep.as_str()]);
    }

    #[test]
    fn booking_keeps_price_snapshot_after_service_edit() {
        let mut store = EntityStore::new();
        let customer = user("Ana", "ana@demo.com", Role::User);
        let provider = user("Mike", "mike@demo.com", Role::Provider);
        let service = store.insert_service(service_for(&provider, 30.0)).clone();

        let booking = Booking::new(
            &customer,
            &service,
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            None,
        );
        let booking_id = store.insert_booking(booking).id.clone();

        store
            .update_service(&service.id, ServicePatch { price: Some(99.0), ..Default::default() })
            .unwrap();

        let booking = store.find_booking(&booking_id).unwrap();
        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.service_price, 30.0);
        assert_eq!(store.find_service(&service.id).unwrap().price, 99.0);
    }

    #[test]
    fn any_status_can_follow_any_status() {
        let mut store = EntityStore::new();
        let customer = user("Ana", "ana@demo.com", Role::User);
        let provider = user("Mike", "mike@demo.com", Role::Provider);
        let service = service_for(&provider, 30.0);
        let id = store
            .insert_booking(Booking::new(
                &customer,
                &service,
                NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
                NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                None,
            ))
            .id
            .clone();

        for from in BookingStatus::ALL {
            for to in BookingStatus::ALL {
                store.set_booking_status(&id, from).unwrap();
                let updated = store.set_booking_status(&id, to).unwrap();
                assert_eq!(updated.status, to);
                assert_eq!(store.find_booking(&id).unwrap().status, to);
            }
        }
    }

    #[test]
    fn updating_missing_records_is_not_found() {
        let mut store = EntityStore::new();
        assert!(matches!(
            store.update_service("nope", ServicePatch::default()),
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            store.set_booking_status("nope", BookingStatus::Accepted),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn remove_user_leaves_their_bookings() {
        let mut store = EntityStore::new();
        let customer = store.insert_user(user("Ana", "ana@demo.com", Role::User)).unwrap().clone();
        let provider = user("Mike", "mike@demo.com", Role::Provider);
        store.insert_booking(Booking::new(
            &customer,
            &service_for(&provider, 30.0),
            NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            Some("Ring twice".to_string()),
        ));

        assert!(store.remove_user(&customer.id));
        assert!(!store.remove_user(&customer.id));
        assert_eq!(store.bookings().len(), 1);
        assert_eq!(store.bookings()[0].user_name, "Ana");
    }
}
