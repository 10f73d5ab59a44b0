//! Users Service - a small CRUD HTTP service over SQLite
//!
//! The users list is memoized in an in-process TTL cache with lazy, read-time expiration.

pub mod api;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::TtlCache;
pub use config::Config;
