//! Events API
//!
//! HTTP service managing registered users and their events:
//! - User CRUD with a sanitize/validate/hash pipeline before every write
//! - Password verification against Argon2 hashes (no sessions or tokens)
//! - Per-user event association lookups
//! - In-memory or PostgreSQL storage backends

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::event::{InMemoryEventRepository, PostgresEventRepository};
use infrastructure::storage::run_storage_migrations;
use infrastructure::user::{
    Argon2Hasher, InMemoryUserRepository, PostgresUserRepository, UserService,
};
use tracing::info;

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// Repositories are chosen by `storage.backend`; the PostgreSQL backend
/// reads DATABASE_URL from the environment and applies pending schema
/// migrations before serving.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::new());

    info!("Storage backend: {}", config.storage.backend);

    let user_service: Arc<dyn api::state::UserServiceTrait> =
        if config.storage.backend.eq_ignore_ascii_case("postgres") {
            let database_url = std::env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL environment variable is required"))?;

            info!("Connecting to PostgreSQL...");
            let pg_pool = sqlx::PgPool::connect(&database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to connect to PostgreSQL: {}", e))?;
            info!("PostgreSQL connection established");

            run_storage_migrations(&pg_pool)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;

            let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
            let event_repository = Arc::new(PostgresEventRepository::new(pg_pool));

            Arc::new(UserService::new(user_repository, event_repository, hasher))
        } else {
            info!("Using in-memory storage");
            let user_repository = Arc::new(InMemoryUserRepository::new());
            let event_repository = Arc::new(InMemoryEventRepository::new());

            Arc::new(UserService::new(user_repository, event_repository, hasher))
        };

    Ok(AppState::new(user_service))
}
