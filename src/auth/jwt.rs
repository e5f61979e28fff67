//! JWT token generation and validation

use crate::core::error::{Result, ShelfError};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the token holder
    pub sub: String,
    pub exp: usize,
}

/// Generate an HS256 token for a user, valid for `ttl_minutes`
pub fn generate_token(username: &str, secret: &str, ttl_minutes: i64) -> Result<String> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::minutes(ttl_minutes))
        .ok_or_else(|| {
            ShelfError::AuthenticationError("Failed to calculate expiration".to_string())
        })?
        .timestamp() as usize;

    let claims = Claims {
        sub: username.to_string(),
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| ShelfError::AuthenticationError(format!("Failed to generate token: {}", e)))
}

/// Validate a token and extract its claims
pub fn validate_token(token: &str, secret: &str) -> Result<Claims> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| ShelfError::AuthenticationError(format!("Invalid token: {}", e)))?;

    Ok(token_data.claims)
}
