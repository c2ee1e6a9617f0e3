//! Home-services marketplace backend library modules.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod interceptors;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod store;
pub mod utils;
pub mod views;
