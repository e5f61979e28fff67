//! Authentication module
//!
//! - User registration and token issuance
//! - JWT token generation and validation
//! - Password hashing and verification
//! - The pluggable [`Authenticator`] and the [`CurrentUser`] extractor

pub mod handlers;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod password;

pub use handlers::{get_me, login, register};
pub use jwt::{generate_token, validate_token, Claims};
pub use middleware::{Authenticator, CurrentUser, JwtAuthenticator};
pub use password::{
    hash_password, hash_password_blocking, verify_password, verify_password_blocking,
};
