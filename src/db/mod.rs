//! Database module
//!
//! - Connection pool management
//! - Repository implementations
//! - Schema migrations
//! - Row models

pub mod manager;
pub mod migrations;
pub mod models;
pub mod repository;

pub use manager::DatabaseManager;
pub use models::{ItemRecord, NewItemRecord, NewUser, User};
pub use repository::{ItemRepository, Repository, UserRepository};
