//! Request DTOs for the users API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for POST /users
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl CreateUserRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_name(self.name.as_deref())
    }
}

/// Request body for PATCH /users/:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
}

impl UpdateUserRequest {
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_name(self.name.as_deref())
    }
}

fn validate_name(name: Option<&str>) -> Option<String> {
    match name {
        Some(name) if !name.trim().is_empty() => None,
        _ => Some("Name is required".to_string()),
    }
}
