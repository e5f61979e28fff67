pub mod items;
pub mod system;

pub use items::*;
pub use system::*;

use crate::auth::middleware::{Authenticator, JwtAuthenticator};
use crate::core::config::SecurityConfig;
use crate::core::services::ItemService;
use crate::db::manager::DatabaseManager;
use crate::db::repository::{ItemRepository, UserRepository};
use axum::extract::FromRef;
use std::sync::Arc;

/// Shared application state for handlers
#[derive(Clone)]
pub struct AppState {
    pub item_service: Arc<ItemService>,
    pub user_repo: Arc<UserRepository>,
    pub authenticator: Arc<dyn Authenticator>,
    pub jwt_secret: Arc<String>,
    pub token_ttl_minutes: i64,
}

impl AppState {
    /// Wire repositories, services and the JWT authenticator around one store handle
    pub fn new(db: Arc<DatabaseManager>, security: &SecurityConfig) -> Self {
        let item_repo = Arc::new(ItemRepository::new(db.clone()));
        let user_repo = Arc::new(UserRepository::new(db));
        let jwt_secret = Arc::new(security.jwt_secret.clone());

        Self {
            item_service: Arc::new(ItemService::new(item_repo)),
            authenticator: Arc::new(JwtAuthenticator::new(jwt_secret.clone(), user_repo.clone())),
            user_repo,
            jwt_secret,
            token_ttl_minutes: security.token_ttl_minutes,
        }
    }

    /// Swap in a different authenticator
    pub fn with_authenticator(mut self, authenticator: Arc<dyn Authenticator>) -> Self {
        self.authenticator = authenticator;
        self
    }
}

impl FromRef<AppState> for Arc<dyn Authenticator> {
    fn from_ref(state: &AppState) -> Self {
        state.authenticator.clone()
    }
}
