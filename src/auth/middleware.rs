//! Bearer-token authentication
//!
//! Handlers that need a caller identity take a [`CurrentUser`] argument. The
//! extractor reads the `Authorization: Bearer <token>` header and hands the
//! token to whatever [`Authenticator`] the application state carries, so the
//! token format and user storage can change without touching handlers.

use crate::auth::jwt::validate_token;
use crate::core::error::{Result, ShelfError};
use crate::db::models::User;
use crate::db::repository::UserRepository;
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use std::sync::Arc;

/// Identity of the authenticated, active caller
#[derive(Clone, Debug, PartialEq)]
pub struct CurrentUser {
    pub id: i64,
    pub username: String,
    pub email: Option<String>,
    pub full_name: Option<String>,
}

impl From<User> for CurrentUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
        }
    }
}

/// Resolves a credential to an active user
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Fails with `AuthenticationError` for a missing, invalid or unknown
    /// credential and `PermissionDenied` for an inactive account.
    async fn resolve_current_active_user(&self, credential: &str) -> Result<CurrentUser>;
}

/// JWT-backed authenticator looking users up in the database
pub struct JwtAuthenticator {
    secret: Arc<String>,
    users: Arc<UserRepository>,
}

impl JwtAuthenticator {
    pub fn new(secret: Arc<String>, users: Arc<UserRepository>) -> Self {
        Self { secret, users }
    }
}

#[async_trait]
impl Authenticator for JwtAuthenticator {
    async fn resolve_current_active_user(&self, credential: &str) -> Result<CurrentUser> {
        let claims = validate_token(credential, &self.secret)?;

        let user = self
            .users
            .find_by_username(&claims.sub)
            .await?
            .ok_or_else(|| {
                ShelfError::AuthenticationError("Could not validate credentials".to_string())
            })?;

        if user.disabled {
            return Err(ShelfError::PermissionDenied("Inactive user".to_string()));
        }

        Ok(CurrentUser::from(user))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header
pub fn bearer_token(parts: &Parts) -> Option<&str> {
    let value = parts.headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token)
    } else {
        None
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    Arc<dyn Authenticator>: FromRef<S>,
{
    type Rejection = ShelfError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self> {
        let token = bearer_token(parts)
            .ok_or_else(|| ShelfError::AuthenticationError("Not authenticated".to_string()))?;

        let authenticator = Arc::<dyn Authenticator>::from_ref(state);
        let user = authenticator.resolve_current_active_user(token).await?;

        tracing::debug!(user_id = user.id, username = %user.username, "Request authenticated");
        Ok(user)
    }
}
