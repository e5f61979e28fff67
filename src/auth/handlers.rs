//! Authentication API handlers

use crate::api::handlers::AppState;
use crate::auth::jwt::generate_token;
use crate::auth::middleware::CurrentUser;
use crate::auth::models::{RegisterRequest, TokenRequest, TokenResponse, UserInfo};
use crate::auth::password::{hash_password_blocking, verify_password_blocking};
use crate::core::error::{Result, ShelfError};
use crate::db::models::NewUser;
use crate::db::repository::Repository;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Form, Json};

/// Handler for POST /auth/register - User registration
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    tracing::info!(username = %req.username, "User registration attempt");

    if req.username.trim().is_empty() || req.password.is_empty() {
        return Err(ShelfError::InvalidRequest(
            "Username and password are required".to_string(),
        ));
    }

    if state.user_repo.find_by_username(&req.username).await?.is_some() {
        tracing::warn!(username = %req.username, "Registration failed: username taken");
        return Err(username_taken());
    }

    let password_hash = hash_password_blocking(req.password).await?;
    let username = req.username.clone();

    // A concurrent registration can still win the UNIQUE(username) race.
    let user = state
        .user_repo
        .create(NewUser {
            username: req.username,
            email: req.email,
            full_name: req.full_name,
            password_hash,
        })
        .await
        .map_err(|e| {
            if is_constraint_violation(&e) {
                tracing::warn!(username = %username, "Registration lost a race on username");
                username_taken()
            } else {
                e
            }
        })?;

    tracing::info!(user_id = user.id, username = %user.username, "User registered successfully");

    Ok((StatusCode::CREATED, Json(UserInfo::from(user))))
}

fn username_taken() -> ShelfError {
    ShelfError::InvalidRequest("Username already exists".to_string())
}

fn is_constraint_violation(error: &ShelfError) -> bool {
    matches!(
        error,
        ShelfError::DatabaseError(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Handler for POST /token - Exchange username/password for an access token
pub async fn login(
    State(state): State<AppState>,
    Form(req): Form<TokenRequest>,
) -> Result<Json<TokenResponse>> {
    tracing::info!(username = %req.username, "Login attempt");

    let invalid = || ShelfError::AuthenticationError("Incorrect username or password".to_string());

    let user = state
        .user_repo
        .find_by_username(&req.username)
        .await?
        .ok_or_else(invalid)?;

    if !verify_password_blocking(req.password, user.password_hash.clone()).await? {
        tracing::warn!(username = %req.username, "Invalid password");
        return Err(invalid());
    }

    let token = generate_token(&user.username, &state.jwt_secret, state.token_ttl_minutes)?;

    tracing::info!(user_id = user.id, username = %user.username, "Login successful");

    Ok(Json(TokenResponse::bearer(token)))
}

/// Handler for GET /users/me - Current user info
pub async fn get_me(user: CurrentUser) -> Json<UserInfo> {
    tracing::debug!(user_id = user.id, "Getting current user info");
    Json(UserInfo::from(user))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password_with_cost;
    use crate::db::manager::DatabaseManager;
    use crate::db::repository::UserRepository;
    use std::sync::Arc;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: None,
            full_name: None,
            password_hash: hash_password_with_cost("pw", 4).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_insert_reads_as_username_taken() {
        let db = Arc::new(DatabaseManager::new_in_memory().unwrap());
        let users = UserRepository::new(db);
        users.create(new_user("carol")).await.unwrap();

        // Bypasses the pre-check, as the losing side of a race would.
        let err = users.create(new_user("carol")).await.unwrap_err();
        assert!(is_constraint_violation(&err));

        let err = username_taken();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid request: Username already exists");
    }

    #[test]
    fn test_other_errors_are_not_constraint_violations() {
        assert!(!is_constraint_violation(&ShelfError::TaskError("join".into())));
        assert!(!is_constraint_violation(&ShelfError::DatabaseError(
            rusqlite::Error::QueryReturnedNoRows
        )));
    }
}
