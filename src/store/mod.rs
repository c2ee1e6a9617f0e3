pub mod entity_store;
pub mod seed;

pub use entity_store::EntityStore;
pub use seed::SeedData;
