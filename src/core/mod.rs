//! Core application layer
//!
//! - Item service (lookup, listing, creation)
//! - Configuration management
//! - Structured logging
//! - Error handling and type system

pub mod config;
pub mod error;
pub mod logging;
pub mod services;

pub use config::Config;
pub use error::{ErrorContext, ErrorResponse, Result, ShelfError};
pub use logging::Logger;
pub use services::ItemService;
