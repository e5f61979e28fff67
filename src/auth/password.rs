//! Password hashing and verification using bcrypt

use crate::core::error::{Result, ShelfError};

/// Hash a password using bcrypt
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, bcrypt::DEFAULT_COST)
}

pub(crate) fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| ShelfError::AuthenticationError(format!("Failed to hash password: {}", e)))
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    bcrypt::verify(password, hash)
        .map_err(|e| ShelfError::AuthenticationError(format!("Failed to verify password: {}", e)))
}

/// Hash a password on the blocking pool
pub async fn hash_password_blocking(password: String) -> Result<String> {
    run_blocking(move || hash_password(&password)).await
}

/// Verify a password on the blocking pool
pub async fn verify_password_blocking(password: String, hash: String) -> Result<bool> {
    run_blocking(move || verify_password(&password, &hash)).await
}

async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ShelfError::TaskError(format!("Password task panicked: {}", e)))?
}
