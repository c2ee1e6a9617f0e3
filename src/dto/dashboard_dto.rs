use serde::Serialize;

use crate::models::{Booking, Service};
use crate::views::CategoryShare;

#[derive(Debug, Clone, Serialize)]
pub struct CustomerDashboard {
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderSummary {
    pub pending: usize,
    pub accepted: usize,
    pub completed: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProviderDashboard {
    pub services: Vec<Service>,
    pub bookings: Vec<Booking>,
    pub summary: ProviderSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminSummary {
    pub customers: usize,
    pub providers: usize,
    pub bookings: usize,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminDashboard {
    pub summary: AdminSummary,
    pub categories: Vec<CategoryShare>,
}
