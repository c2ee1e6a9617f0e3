use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
    http::header,
};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AppState;
use crate::interceptors::{AppError, AppResult};
use crate::models::{Role, User};
use crate::session::View;

/// JWT Claims structure - contains user id, email and role
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    /// Claims for `user`, valid for `expiration_seconds` from `issued_at`
    pub fn for_user(user: &User, issued_at: DateTime<Utc>, expiration_seconds: i64) -> Self {
        let exp = issued_at + Duration::seconds(expiration_seconds);

        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            exp: exp.timestamp(),
            iat: issued_at.timestamp(),
        }
    }

    /// Reject callers whose role is not in `allowed`
    pub fn require_role(&self, allowed: &[Role]) -> AppResult<()> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(AppError::Forbidden(format!("This action is not available to the {} role", self.role)))
        }
    }

    /// Dashboards are gated on the token's role, not on a client view label
    pub fn authorize_view(&self, view: View) -> AppResult<()> {
        match view.required_role() {
            Some(required) if required != self.role => Err(AppError::Forbidden(format!(
                "The {} dashboard requires the {} role",
                view.as_str(),
                required
            ))),
            _ => Ok(()),
        }
    }
}

/// Generate JWT token from claims
pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, AppError> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(AppError::JwtError)
}

/// Verify and decode JWT token
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        tracing::warn!("JWT verification failed: {}", e);
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Unauthorized("Token expired".to_string())
            }
            _ => AppError::Unauthorized("Invalid token".to_string()),
        }
    })?;

    Ok(token_data.claims)
}

/// JWT Authentication Middleware
pub struct JwtMiddleware;

impl JwtMiddleware {
    pub async fn auth(
        State(state): State<AppState>,
        mut request: Request,
        next: Next,
    ) -> Result<Response, AppError> {
        // Extract token from Authorization header
        let auth_header = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

        let claims = verify_token(token, &state.config.jwt_secret)?;

        // Add claims to request extensions for handlers to use
        request.extensions_mut().insert(claims);

        Ok(next.run(request).await)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn provider() -> User {
        User {
            id: "p1".to_string(),
            name: "Mike Fixit".to_string(),
            email: "provider@demo.com".to_string(),
            password_hash: String::new(),
            role: Role::Provider,
            joined_date: NaiveDate::from_ymd_opt(2023, 2, 10).unwrap(),
        }
    }

    #[test]
    fn token_round_trips_role() {
        let claims = Claims::for_user(&provider(), Utc::now(), 3600);
        let token = generate_token(&claims, "secret").unwrap();

        let decoded = verify_token(&token, "secret").unwrap();
        assert_eq!(decoded.id, "p1");
        assert_eq!(decoded.role, Role::Provider);
    }

    #[test]
    fn wrong_secret_and_expired_tokens_are_unauthorized() {
        let claims = Claims::for_user(&provider(), Utc::now(), 3600);
        let token = generate_token(&claims, "secret").unwrap();
        assert!(matches!(verify_token(&token, "other"), Err(AppError::Unauthorized(_))));

        let stale = Claims::for_user(&provider(), Utc::now() - Duration::days(2), 3600);
        let token = generate_token(&stale, "secret").unwrap();
        match verify_token(&token, "secret") {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token expired"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn role_gates() {
        let claims = Claims::for_user(&provider(), Utc::now(), 3600);
        assert!(claims.require_role(&[Role::Provider, Role::Admin]).is_ok());
        assert!(matches!(claims.require_role(&[Role::User]), Err(AppError::Forbidden(_))));
        assert!(claims.authorize_view(View::ProviderDash).is_ok());
        assert!(matches!(claims.authorize_view(View::AdminDash), Err(AppError::Forbidden(_))));
    }
}
