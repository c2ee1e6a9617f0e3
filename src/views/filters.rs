use crate::models::{Booking, Category, Service};

/// Catalog filter: `category: None` means "All"
#[derive(Debug, Clone, Default)]
pub struct ServiceFilter {
    pub category: Option<Category>,
    pub search: String,
}

impl ServiceFilter {
    pub fn matches(&self, service: &Service) -> bool {
        if let Some(category) = self.category {
            if service.category != category {
                return false;
            }
        }

        let needle = self.search.to_lowercase();
        needle.is_empty()
            || service.title.to_lowercase().contains(&needle)
            || service.category.label().to_lowercase().contains(&needle)
    }
}

pub fn filter_services<'a>(services: &'a [Service], filter: &ServiceFilter) -> Vec<&'a Service> {
    services.iter().filter(|s| filter.matches(s)).collect()
}

pub fn services_for_provider<'a>(services: &'a [Service], provider_id: &str) -> Vec<&'a Service> {
    services.iter().filter(|s| s.provider_id == provider_id).collect()
}

pub fn bookings_for_customer<'a>(bookings: &'a [Booking], user_id: &str) -> Vec<&'a Booking> {
    bookings.iter().filter(|b| b.user_id == user_id).collect()
}

pub fn bookings_for_provider<'a>(bookings: &'a [Booking], provider_id: &str) -> Vec<&'a Booking> {
    bookings.iter().filter(|b| b.provider_id == provider_id).collect()
}
