//! API routes

use crate::api::handlers::{create_item, get_item, health_check, list_items, root, AppState};
use crate::auth::handlers::{get_me, login, register};
use axum::{
    routing::{get, post},
    Router,
};

/// Build the API routes
///
/// Authentication is enforced per handler through the `CurrentUser`
/// extractor, so public and protected routes share one router.
pub fn build_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        // Items
        .route("/items/:item_id", get(get_item))
        .route("/items_list/:item_id", get(list_items))
        .route("/items", post(create_item))
        // Auth
        .route("/auth/register", post(register))
        .route("/token", post(login))
        .route("/users/me", get(get_me))
        .with_state(state)
}
