//! REST API module
//!
//! - HTTP server and routing
//! - Item and system handlers
//! - Request/response models, including the item projection
//! - Trace ID middleware

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use middleware::{trace_id_middleware, TraceId, TRACE_ID_HEADER};
pub use models::{ItemPayload, ItemView};
pub use server::ApiServer;
