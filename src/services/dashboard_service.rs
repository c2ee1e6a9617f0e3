use crate::config::AppState;
use crate::dto::{AdminDashboard, AdminSummary, CustomerDashboard, ProviderDashboard, ProviderSummary};
use crate::interceptors::AppError;
use crate::middleware::Claims;
use crate::models::{BookingStatus, Role};
use crate::session::View;
use crate::views::{
    bookings_for_customer, bookings_for_provider, category_distribution, completed_revenue, count_by_role,
    count_by_status, services_for_provider,
};

/// Role dashboards, each recomputed from the store on every call
#[derive(Clone)]
pub struct DashboardService {
    state: AppState,
}

impl DashboardService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub async fn customer(&self, actor: &Claims) -> Result<CustomerDashboard, AppError> {
        actor.authorize_view(View::UserDash)?;

        let store = self.state.store.read().await;
        Ok(CustomerDashboard {
            bookings: bookings_for_customer(store.bookings(), &actor.id)
                .into_iter()
                .cloned()
                .collect(),
        })
    }

    pub async fn provider(&self, actor: &Claims) -> Result<ProviderDashboard, AppError> {
        actor.authorize_view(View::ProviderDash)?;

        let store = self.state.store.read().await;
        let bookings = bookings_for_provider(store.bookings(), &actor.id);
        let summary = ProviderSummary {
            pending: count_by_status(bookings.iter().copied(), BookingStatus::Pending),
            accepted: count_by_status(bookings.iter().copied(), BookingStatus::Accepted),
            completed: count_by_status(bookings.iter().copied(), BookingStatus::Completed),
            revenue: completed_revenue(bookings.iter().copied()),
        };

        Ok(ProviderDashboard {
            services: services_for_provider(store.services(), &actor.id)
                .into_iter()
                .cloned()
                .collect(),
            bookings: bookings.into_iter().cloned().collect(),
            summary,
        })
    }

    pub async fn admin(&self, actor: &Claims) -> Result<AdminDashboard, AppError> {
        actor.authorize_view(View::AdminDash)?;

        let store = self.state.store.read().await;
        Ok(AdminDashboard {
            summary: AdminSummary {
                customers: count_by_role(store.users(), Role::User),
                providers: count_by_role(store.users(), Role::Provider),
                bookings: store.bookings().len(),
                revenue: completed_revenue(store.bookings()),
            },
            categories: category_distribution(store.services()),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::Category;
    use crate::services::BookingService;

    async fn claims_for(state: &AppState, user_id: &str) -> Claims {
        let store = state.store.read().await;
        Claims::for_user(store.find_user(user_id).unwrap(), Utc::now(), 3600)
    }

    #[tokio::test]
    async fn provider_summary_tracks_status_changes() {
        let state = AppState::seeded_for_tests();
        let dashboards = DashboardService::new(state.clone());
        let provider = claims_for(&state, "p1").await;

        let before = dashboards.provider(&provider).await.unwrap();
        assert_eq!(before.services.len(), 2);
        assert_eq!(
            before.summary,
            ProviderSummary { pending: 1, accepted: 0, completed: 1, revenue: 80.0 }
        );

        BookingService::new(state.clone())
            .update_status(&provider, "b2", BookingStatus::Completed)
            .await
            .unwrap();

        let after = dashboards.provider(&provider).await.unwrap();
        assert_eq!(
            after.summary,
            ProviderSummary { pending: 0, accepted: 0, completed: 2, revenue: 125.0 }
        );
    }

    #[tokio::test]
    async fn admin_overview_counts_roles_and_categories() {
        let state = AppState::seeded_for_tests();
        let admin = claims_for(&state, "a1").await;

        let overview = DashboardService::new(state).admin(&admin).await.unwrap();
        assert_eq!(
            overview.summary,
            AdminSummary { customers: 1, providers: 1, bookings: 2, revenue: 80.0 }
        );

        let beauty = overview.categories.iter().find(|c| c.category == Category::Beauty).unwrap();
        assert_eq!((beauty.count, beauty.width), (1, 100.0));
    }

    #[tokio::test]
    async fn dashboards_are_role_gated() {
        let state = AppState::seeded_for_tests();
        let dashboards = DashboardService::new(state.clone());
        let customer = claims_for(&state, "u1").await;
        let provider = claims_for(&state, "p1").await;

        assert_eq!(dashboards.customer(&customer).await.unwrap().bookings.len(), 2);
        assert!(matches!(dashboards.customer(&provider).await, Err(AppError::Forbidden(_))));
        assert!(matches!(dashboards.provider(&customer).await, Err(AppError::Forbidden(_))));
        assert!(matches!(dashboards.admin(&provider).await, Err(AppError::Forbidden(_))));
    }
}
