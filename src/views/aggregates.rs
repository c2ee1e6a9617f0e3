use serde::Serialize;

use crate::models::{Booking, BookingStatus, Category, Role, Service, User};

/// One bar of the admin category chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub count: usize,
    /// Bar width in percent of the busiest category
    pub width: f64,
}

pub fn count_by_status<'a, I>(bookings: I, status: BookingStatus) -> usize
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings.into_iter().filter(|b| b.status == status).count()
}

/// Sum of snapshot prices over completed bookings
pub fn completed_revenue<'a, I>(bookings: I) -> f64
where
    I: IntoIterator<Item = &'a Booking>,
{
    bookings
        .into_iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .map(|b| b.service_price)
        .sum()
}

pub fn count_by_role(users: &[User], role: Role) -> usize {
    users.iter().filter(|u| u.role == role).count()
}

/// Per-category service counts, max-normalized. All widths are 0 when the
/// catalog is empty.
pub fn category_distribution(services: &[Service]) -> Vec<CategoryShare> {
    let counts: Vec<(Category, usize)> = Category::ALL
        .into_iter()
        .map(|c| (c, services.iter().filter(|s| s.category == c).count()))
        .collect();
    let max = counts.iter().map(|(_, n)| *n).max().unwrap_or(0);

    counts
        .into_iter()
        .map(|(category, count)| CategoryShare {
            category,
            count,
            width: if max == 0 { 0.0 } else { count as f64 / max as f64 * 100.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SeedData;

    #[test]
    fn revenue_counts_only_completed_bookings() {
        let mut bookings = SeedData::builtin().unwrap().bookings;
        assert_eq!(completed_revenue(&bookings), 80.0);

        bookings[1].status = BookingStatus::Completed;
        assert_eq!(completed_revenue(&bookings), 125.0);
        assert_eq!(count_by_status(&bookings, BookingStatus::Completed), 2);
        assert_eq!(count_by_status(&bookings, BookingStatus::Pending), 0);
    }

    #[test]
    fn distribution_normalizes_against_busiest_category() {
        let mut services = SeedData::builtin().unwrap().services;
        let mut extra = services[0].clone();
        extra.id = "s4".to_string();
        services.push(extra);

        let shares = category_distribution(&services);
        assert_eq!(shares.len(), Category::ALL.len());

        let cleaning = shares.iter().find(|s| s.category == Category::Cleaning).unwrap();
        let plumbing = shares.iter().find(|s| s.category == Category::Plumbing).unwrap();
        let moving = shares.iter().find(|s| s.category == Category::Moving).unwrap();
        assert_eq!((cleaning.count, cleaning.width), (2, 100.0));
        assert_eq!((plumbing.count, plumbing.width), (1, 50.0));
        assert_eq!((moving.count, moving.width), (0, 0.0));
    }

    #[test]
    fn empty_catalog_has_zero_widths() {
        assert!(category_distribution(&[]).iter().all(|s| s.count == 0 && s.width == 0.0));
    }
}
