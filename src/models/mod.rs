//! Request and Response models for the users API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! `User` row type.

pub mod requests;
pub mod responses;
pub mod user;

// Re-export commonly used types
pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use responses::{
    CacheStatsResponse, DataResponse, ErrorResponse, HealthResponse, MessageResponse,
    UserListResponse,
};
pub use user::User;
