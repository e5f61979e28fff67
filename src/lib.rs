//! Shelf item service
//!
//! A small HTTP service storing items in SQLite: public lookup and listing,
//! bearer-token protected creation, and a projection that stamps every
//! returned item with the time it was served.

pub mod api;
pub mod auth;
pub mod core;
pub mod db;

// Re-export commonly used types
pub use crate::core::{Config, ItemService, ShelfError};
pub use api::ApiServer;
pub use db::DatabaseManager;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
