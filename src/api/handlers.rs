//! API Handlers
//!
//! HTTP request handlers for the users endpoints and cache administration.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use tracing::{debug, info};

use crate::cache::TtlCache;
use crate::config::Config;
use crate::db::UserRepository;
use crate::error::{ApiError, Result};
use crate::models::{
    CacheStatsResponse, CreateUserRequest, DataResponse, HealthResponse, MessageResponse,
    UpdateUserRequest, User, UserListResponse,
};

/// Cache key under which the full users list is memoized.
pub const USERS_CACHE_KEY: &str = "users";

/// Cache holding query results for the read endpoints.
pub type UsersCache = TtlCache<Vec<User>>;

/// Application state shared across all handlers.
///
/// The cache is created once at startup and shared by reference; it does
/// its own locking, so handlers never hold a guard across an await.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<UsersCache>,
    pub users: UserRepository,
    /// TTL applied when the users list is cached
    pub users_ttl: Duration,
    /// Bumped on every users write; a list read before the bump is never cached
    users_generation: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(cache: Arc<UsersCache>, users: UserRepository, users_ttl: Duration) -> Self {
        Self {
            cache,
            users,
            users_ttl,
            users_generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Creates a new AppState from configuration and an open repository.
    pub fn from_config(config: &Config, users: UserRepository) -> Self {
        let cache = Arc::new(TtlCache::with_default_ttl(config.cache_default_ttl()));
        Self::new(cache, users, config.users_cache_ttl())
    }

    // == Users Generation ==
    /// Returns the current users write generation.
    pub fn users_generation(&self) -> u64 {
        self.users_generation.load(Ordering::SeqCst)
    }

    // == Cache Users ==
    /// Caches `users` read at `generation`.
    ///
    /// If a write bumped the generation in the meantime the entry is dropped
    /// again. The writer bumps before it clears, so either this check sees the
    /// bump or the writer's clear lands after this set.
    pub fn cache_users(&self, generation: u64, users: Vec<User>) {
        self.cache.set(USERS_CACHE_KEY, users, self.users_ttl);
        if self.users_generation() != generation {
            self.cache.clear(USERS_CACHE_KEY);
            debug!("Users list changed during read, not cached");
        }
    }

    // == Invalidate Users ==
    /// Marks the cached users list as outdated after a write.
    pub fn invalidate_users(&self) {
        self.users_generation.fetch_add(1, Ordering::SeqCst);
        self.cache.clear(USERS_CACHE_KEY);
        debug!("Users list cache invalidated");
    }
}

/// Handler for GET /users/run-migrations
pub async fn run_migrations_handler(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    state
        .users
        .migrate()
        .await
        .map_err(ApiError::database("There was an error running migrations"))?;

    Ok(Json(MessageResponse::new(
        "Migrations executed with successfully",
    )))
}

/// Handler for GET /users
///
/// Serves from the cache when a fresh list is present, otherwise queries the
/// database and caches the result.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<UserListResponse<Vec<User>>>> {
    if let Some(users) = state.cache.get(USERS_CACHE_KEY) {
        return Ok(Json(UserListResponse::cached(users)));
    }

    let generation = state.users_generation();
    let users = state
        .users
        .list()
        .await
        .map_err(ApiError::database("There was an error retrieving users"))?;

    state.cache_users(generation, users.clone());

    Ok(Json(UserListResponse::fresh(users)))
}

/// Handler for GET /users/:id
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DataResponse<Vec<User>>>> {
    let users = state
        .users
        .find_by_id(id)
        .await
        .map_err(ApiError::database("There was an error retrieving the user"))?;

    Ok(Json(DataResponse::new("User retrieved successfully", users)))
}

/// Handler for POST /users
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }
    let name = req.name.as_deref().unwrap_or_default();

    let id = state
        .users
        .create(name, req.email.as_deref())
        .await
        .map_err(ApiError::database("There was an error creating the user"))?;

    state.invalidate_users();
    info!(id, "User created");
    Ok(Json(MessageResponse::new("User created successfully")))
}

/// Handler for PATCH /users/:id
pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: std::result::Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let Json(req) = payload?;
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::Validation(error_msg));
    }
    let name = req.name.as_deref().unwrap_or_default();

    let updated = state
        .users
        .update_name(id, name)
        .await
        .map_err(ApiError::database("There was an error updating the user"))?;

    state.invalidate_users();
    info!(id, updated, "User updated");
    Ok(Json(MessageResponse::new("User updated successfully")))
}

/// Handler for DELETE /users/:id
pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>> {
    let deleted = state
        .users
        .delete(id)
        .await
        .map_err(ApiError::database("There was an error deleting the user"))?;

    state.invalidate_users();
    info!(id, deleted, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Handler for DELETE /admin/cache
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    state.cache.clear_all();
    info!("Cache cleared");
    Json(MessageResponse::new("Cache cleared"))
}

/// Handler for DELETE /admin/cache/:key
pub async fn clear_cache_key_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<MessageResponse> {
    state.cache.clear(&key);
    Json(MessageResponse::new(format!("Key '{}' cleared", key)))
}

/// Handler for GET /admin/cache/stats
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStatsResponse> {
    Json(state.cache.stats().into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
