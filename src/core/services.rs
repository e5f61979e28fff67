//! Business logic services
//!
//! Coordinates the item repository and the item projection for the REST
//! layer. Each operation is a single store interaction.

use crate::api::models::{ItemPayload, ItemView};
use crate::auth::middleware::CurrentUser;
use crate::core::error::{Result, ShelfError};
use crate::db::models::ItemRecord;
use crate::db::repository::{ItemRepository, Repository};
use std::sync::Arc;

/// Item service: lookup, listing and creation
pub struct ItemService {
    item_repo: Arc<ItemRepository>,
}

impl ItemService {
    pub fn new(item_repo: Arc<ItemRepository>) -> Self {
        Self { item_repo }
    }

    /// Fetch one item by id and project it
    pub async fn fetch_one(&self, item_id: i64) -> Result<ItemView> {
        let record = self
            .item_repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ShelfError::item_not_found(item_id))?;

        Ok(ItemView::stamp(&record))
    }

    /// Project every stored item, in store order
    pub async fn fetch_all(&self) -> Result<Vec<ItemView>> {
        let records = self.item_repo.find_all().await?;
        Ok(records.iter().map(ItemView::stamp).collect())
    }

    /// Persist a new item on behalf of an authenticated user
    ///
    /// The caller identity only gates the write; it is not recorded.
    pub async fn create_one(
        &self,
        payload: ItemPayload,
        _user: &CurrentUser,
    ) -> Result<(ItemRecord, ItemView)> {
        let record = self.item_repo.create(payload.into()).await?;
        tracing::info!(item_id = record.id, name = %record.name, "Item created");

        let view = ItemView::stamp(&record);
        Ok((record, view))
    }
}
