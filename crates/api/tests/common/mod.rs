use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use hrms_api::auth::jwt::JwtConfig;
use hrms_api::config::ServerConfig;
use hrms_api::router::build_app_router;
use hrms_api::state::AppState;
use hrms_api::uploads::PhotoStore;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config(upload_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload_dir,
        jwt: JwtConfig {
            secret: "integration-test-secret-key".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool and a temporary upload directory.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool, upload_dir: PathBuf) -> Router {
    let config = test_config(upload_dir.clone());
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        photos: Arc::new(PhotoStore::new(upload_dir)),
    };
    build_app_router(state, &config)
}
