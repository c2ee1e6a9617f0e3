use std::collections::HashSet;

use chrono::NaiveDate;
use serde::Deserialize;

use super::EntityStore;
use crate::interceptors::{AppError, AppResult};
use crate::models::{Booking, Role, Service, User};
use crate::utils::hash_password;

const DEFAULT_SEED: &str = include_str!("../../seed/default.json");

/// Seed roster entry; the password is plaintext and hashed on load
#[derive(Debug, Clone, Deserialize)]
pub struct SeedUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub joined_date: NaiveDate,
}

/// Initial rosters used to populate the store at startup
#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub bookings: Vec<Booking>,
}

impl SeedData {
    /// Built-in demo rosters
    pub fn builtin() -> AppResult<Self> {
        Self::from_json(DEFAULT_SEED)
    }

    /// Load rosters from `path`, or the built-in rosters when no path is set
    pub fn load(path: Option<&str>) -> AppResult<Self> {
        match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .map_err(|e| AppError::SeedError(format!("Failed to read {}: {}", path, e)))?;
                tracing::info!("Loading seed data from {}", path);
                Self::from_json(&raw)
            }
            None => Self::builtin(),
        }
    }

    pub fn from_json(raw: &str) -> AppResult<Self> {
        serde_json::from_str(raw)
            .map_err(|e| AppError::SeedError(format!("Invalid seed data: {}", e)))
    }

    /// Hash seed passwords and build a store, rejecting duplicate ids or emails
    /// and negative prices or ratings
    pub fn into_store(self, bcrypt_cost: u32) -> AppResult<EntityStore> {
        let mut store = EntityStore::new();

        let mut user_ids = HashSet::new();
        for seed in self.users {
            if !user_ids.insert(seed.id.clone()) {
                return Err(AppError::SeedError(format!("Duplicate user id '{}'", seed.id)));
            }
            let user = User {
                id: seed.id,
                name: seed.name,
                email: seed.email,
                password_hash: hash_password(&seed.password, bcrypt_cost)?,
                role: seed.role,
                joined_date: seed.joined_date,
            };
            store
                .insert_user(user)
                .map_err(|e| AppError::SeedError(e.to_string()))?;
        }

        let mut service_ids = HashSet::new();
        for service in self.services {
            if !service_ids.insert(service.id.clone()) {
                return Err(AppError::SeedError(format!("Duplicate service id '{}'", service.id)));
            }
            if service.price < 0.0 || service.rating < 0.0 {
                return Err(AppError::SeedError(format!(
                    "Service '{}' has a negative price or rating",
                    service.id
                )));
            }
            store.insert_service(service);
        }

        let mut booking_ids = HashSet::new();
        for booking in self.bookings {
            if !booking_ids.insert(booking.id.clone()) {
                return Err(AppError::SeedError(format!("Duplicate booking id '{}'", booking.id)));
            }
            if booking.service_price < 0.0 {
                return Err(AppError::SeedError(format!("Booking '{}' has a negative price", booking.id)));
            }
            store.insert_booking(booking);
        }

        tracing::info!(
            users = store.users().len(),
            services = store.services().len(),
            bookings = store.bookings().len(),
            "Entity store seeded"
        );

        Ok(store)
    }
}
