//! API Module
//!
//! HTTP handlers and routing for the users REST API.
//!
//! The handlers are thin glue: they validate input, call the repository and
//! consult or invalidate the shared TTL cache.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
