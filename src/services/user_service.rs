use crate::config::AppState;
use crate::dto::{CreateUserRequest, LoginRequest, LoginResponse, UserResponse};
use crate::interceptors::AppError;
use crate::middleware::{generate_token, Claims};
use crate::models::{Role, User};
use crate::session::{Session, ToastKind};
use crate::utils::{hash_password, validate_request};

#[derive(Clone)]
pub struct UserService {
    state: AppState,
}

impl UserService {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Register a new customer or provider account and sign it in
    pub async fn register(&self, request: CreateUserRequest) -> Result<LoginResponse, AppError> {
        validate_request(&request)?;

        if request.role == Role::Admin {
            return Err(AppError::Forbidden("Admin accounts cannot be self-registered".to_string()));
        }

        // Hash outside the lock
        let password_hash = hash_password(&request.password, self.state.config.bcrypt_cost)?;
        let joined_date = self.state.clock.now().date_naive();
        let user = User::new(request.name, request.email, password_hash, request.role, joined_date);

        let user = {
            let mut store = self.state.store.write().await;
            store.insert_user(user)?.clone()
        };
        tracing::info!(user_id = %user.id, role = %user.role, "User registered");

        self.open_session(&user, Some("Account created successfully!"))
    }

    /// Check credentials and open a session for the account
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        validate_request(&request)?;

        let user = {
            let store = self.state.store.read().await;
            store.authenticate(&request.email, &request.password)?.clone()
        };

        let response = self.open_session(&user, None)?;
        tracing::info!(user_id = %user.id, view = response.view.as_str(), "User logged in");

        Ok(response)
    }

    /// Sign `user` in and build the login payload.
    /// `greeting` replaces the default welcome toast.
    fn open_session(&self, user: &User, greeting: Option<&str>) -> Result<LoginResponse, AppError> {
        let now = self.state.clock.now();
        let mut session = Session::new();
        session.login(user, now);
        if let Some(greeting) = greeting {
            session.notify(greeting, ToastKind::Success, now);
        }

        let claims = Claims::for_user(user, now, self.state.config.jwt_expiration);
        let token = generate_token(&claims, &self.state.config.jwt_secret)?;
        let message = session
            .toast(now)
            .map(|t| t.message.clone())
            .unwrap_or_else(|| "Login successful".to_string());

        Ok(LoginResponse {
            token,
            user: user.to_response(),
            view: session.view(),
            message,
        })
    }

    /// Get user by ID
    pub async fn get_user_by_id(&self, user_id: &str) -> Result<UserResponse, AppError> {
        let store = self.state.store.read().await;
        let user = store
            .find_user(user_id)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(user.to_response())
    }

    /// Admin listing, optionally narrowed to one role
    pub async fn list_users(&self, actor: &Claims, role: Option<Role>) -> Result<Vec<UserResponse>, AppError> {
        actor.require_role(&[Role::Admin])?;

        let store = self.state.store.read().await;
        Ok(store
            .users()
            .iter()
            .filter(|u| role.map_or(true, |r| u.role == r))
            .map(User::to_response)
            .collect())
    }

    /// Admin removal of an account. Removing an id that is already gone
    /// succeeds and returns `false`.
    pub async fn delete_user(&self, actor: &Claims, user_id: &str) -> Result<bool, AppError> {
        actor.require_role(&[Role::Admin])?;

        if actor.id == user_id {
            return Err(AppError::BadRequest("Admins cannot remove their own account".to_string()));
        }

        let removed = self.state.store.write().await.remove_user(user_id);
        if removed {
            tracing::info!(user_id, admin_id = %actor.id, "User removed");
        }

        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, TimeZone, Utc};

    use super::*;
    use crate::config::AppConfig;
    use crate::middleware::auth::verify_token;
    use crate::session::View;
    use crate::store::SeedData;
    use crate::utils::MockClock;

    fn service() -> UserService {
        UserService::new(AppState::seeded_for_tests())
    }

    fn signup(email: &str, role: Role) -> CreateUserRequest {
        CreateUserRequest {
            name: "Dana Brush".to_string(),
            email: email.to_string(),
            password: "paint-it-all".to_string(),
            role,
        }
    }

    async fn admin_claims(service: &UserService) -> Claims {
        let store = service.state.store.read().await;
        let admin = store.find_user("a1").unwrap();
        Claims::for_user(admin, Utc::now(), 3600)
    }

    #[tokio::test]
    async fn registered_user_can_log_in_immediately() {
        let service = service();
        let registered = service.register(signup("dana@demo.com", Role::Provider)).await.unwrap();
        assert_eq!(registered.user.role, Role::Provider);
        assert_eq!(registered.view, View::ProviderDash);
        assert_eq!(registered.message, "Account created successfully!");
        let claims = verify_token(&registered.token, "test-secret").unwrap();
        assert_eq!(claims.id, registered.user.id);

        let login = service
            .login(LoginRequest {
                email: "dana@demo.com".to_string(),
                password: "paint-it-all".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(login.user.id, registered.user.id);
        assert_eq!(login.view, View::ProviderDash);
        assert_eq!(login.message, "Welcome back, Dana Brush!");

        let claims = verify_token(&login.token, "test-secret").unwrap();
        assert_eq!(claims.role, Role::Provider);
    }

    #[tokio::test]
    async fn duplicate_email_registration_is_rejected() {
        let service = service();
        let err = service.register(signup("user@demo.com", Role::User)).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn admin_cannot_self_register() {
        let err = service().register(signup("boss@demo.com", Role::Admin)).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn malformed_signup_is_a_validation_error() {
        let mut request = signup("not-an-email", Role::User);
        request.password = "123".to_string();
        match service().register(request).await.unwrap_err() {
            AppError::ValidationError(msg) => {
                assert!(msg.contains("email"));
                assert!(msg.contains("password"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn login_requires_exact_credentials() {
        let service = service();
        for (email, password) in [("user@demo.com", "1234"), ("user@demo.co", "123"), ("User@demo.com", "123")] {
            let err = service
                .login(LoginRequest { email: email.to_string(), password: password.to_string() })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::Unauthorized(_)), "{email}/{password}");
        }

        let ok = service
            .login(LoginRequest { email: "admin@demo.com".to_string(), password: "123".to_string() })
            .await
            .unwrap();
        assert_eq!(ok.view, View::AdminDash);
    }

    #[tokio::test]
    async fn joined_date_comes_from_the_clock() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Utc.with_ymd_and_hms(2024, 7, 4, 12, 0, 0).unwrap());
        let config = AppConfig::for_tests();
        let store = SeedData::builtin().unwrap().into_store(config.bcrypt_cost).unwrap();
        let service = UserService::new(AppState::with_clock(store, config, Arc::new(clock)));

        let registered = service.register(signup("dana@demo.com", Role::User)).await.unwrap();
        assert_eq!(registered.user.joined_date, NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());
    }

    #[tokio::test]
    async fn admin_lists_and_removes_users() {
        let service = service();
        let admin = admin_claims(&service).await;

        let providers = service.list_users(&admin, Some(Role::Provider)).await.unwrap();
        assert_eq!(providers.iter().map(|u| u.id.as_str()).collect::<Vec<_>>(), vec!["p1"]);

        assert!(service.delete_user(&admin, "u1").await.unwrap());
        assert!(!service.delete_user(&admin, "u1").await.unwrap());
        assert!(matches!(service.get_user_by_id("u1").await, Err(AppError::NotFound(_))));
        assert_eq!(service.state.store.read().await.bookings().len(), 2);
    }

    #[tokio::test]
    async fn non_admins_cannot_manage_users() {
        let service = service();
        let customer = {
            let store = service.state.store.read().await;
            Claims::for_user(store.find_user("u1").unwrap(), Utc::now(), 3600)
        };

        assert!(matches!(service.list_users(&customer, None).await, Err(AppError::Forbidden(_))));
        assert!(matches!(service.delete_user(&customer, "p1").await, Err(AppError::Forbidden(_))));

        let admin = admin_claims(&service).await;
        assert!(matches!(service.delete_user(&admin, "a1").await, Err(AppError::BadRequest(_))));
    }
}
