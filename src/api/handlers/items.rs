use crate::api::models::{ItemPayload, ItemQuery, ItemView};
use crate::auth::middleware::CurrentUser;
use crate::core::error::Result;
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use super::AppState;

/// Handler for GET /items/:item_id - Get one item
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<ItemView>> {
    tracing::debug!(item_id, q = %query.q, "Fetching item");

    let view = state.item_service.fetch_one(item_id).await?;
    Ok(Json(view))
}

/// Handler for GET /items_list/:item_id - List all items
///
/// `item_id` is accepted for route compatibility and otherwise ignored.
pub async fn list_items(
    State(state): State<AppState>,
    Path(item_id): Path<i64>,
    Query(query): Query<ItemQuery>,
) -> Result<Json<Vec<ItemView>>> {
    tracing::debug!(item_id, q = %query.q, "Listing items");

    let views = state.item_service.fetch_all().await?;
    Ok(Json(views))
}

/// Handler for POST /items - Create an item (authenticated)
///
/// `CurrentUser` is extracted before the body, so a rejected credential
/// never reaches the store.
pub async fn create_item(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ItemPayload>,
) -> Result<impl IntoResponse> {
    tracing::info!(username = %user.username, name = %payload.name, "Creating item");

    let (record, view) = state.item_service.create_one(payload, &user).await?;

    Ok((
        [(header::LOCATION, format!("/items/{}", record.id))],
        Json(view),
    ))
}
