//! API Routes
//!
//! Configures the Axum router with the users and cache administration endpoints.

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, clear_cache_key_handler, create_user_handler,
    delete_user_handler, get_user_handler, health_handler, list_users_handler,
    run_migrations_handler, update_user_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /users/run-migrations` - Create the schema
/// - `GET /users` - List users (cached)
/// - `GET /users/:id` - Fetch one user
/// - `POST /users` - Create a user
/// - `PATCH /users/:id` - Rename a user
/// - `DELETE /users/:id` - Delete a user
/// - `DELETE /admin/cache` - Drop every cached entry
/// - `DELETE /admin/cache/:key` - Drop one cached entry
/// - `GET /admin/cache/stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let users = Router::new()
        .route("/", get(list_users_handler).post(create_user_handler))
        .route("/run-migrations", get(run_migrations_handler))
        .route(
            "/:id",
            get(get_user_handler)
                .patch(update_user_handler)
                .delete(delete_user_handler),
        );

    let admin = Router::new()
        .route("/cache", delete(clear_cache_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/:key", delete(clear_cache_key_handler));

    Router::new()
        .nest("/users", users)
        .nest("/admin", admin)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TtlCache;
    use crate::db::{connect_in_memory, UserRepository};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Arc;
    use std::time::Duration;
    use tower::util::ServiceExt;

    async fn create_test_app() -> Router {
        let users = UserRepository::new(connect_in_memory().await.unwrap());
        users.migrate().await.unwrap();
        let state = AppState::new(Arc::new(TtlCache::new()), users, Duration::from_secs(60));
        create_router(state)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_users_endpoint() {
        let app = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_routes_are_case_sensitive() {
        let app = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/USERS").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_rejected() {
        let app = create_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/users/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_cache_stats_endpoint() {
        let app = create_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/admin/cache/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
