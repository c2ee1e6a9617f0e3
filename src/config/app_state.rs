use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::store::EntityStore;
use crate::utils::{Clock, SystemClock};

/// Application state shared across all handlers and services
#[derive(Clone)]
pub struct AppState {
    /// The in-memory entity store; writers hold the lock for a whole mutation
    pub store: Arc<RwLock<EntityStore>>,
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Create new AppState on the wall clock
    pub fn new(store: EntityStore, config: AppConfig) -> Self {
        Self::with_clock(store, config, Arc::new(SystemClock))
    }

    pub fn with_clock(store: EntityStore, config: AppConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
            clock,
        }
    }
}

#[cfg(test)]
impl AppState {
    /// State over the built-in seed with test settings
    pub fn seeded_for_tests() -> Self {
        let config = AppConfig::for_tests();
        let store = crate::store::SeedData::builtin()
            .and_then(|seed| seed.into_store(config.bcrypt_cost))
            .expect("built-in seed loads");
        Self::new(store, config)
    }
}
