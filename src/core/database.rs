use crate::core::config::DatabaseConfig;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Build the shared connection pool handed to every service at startup.
///
/// All request serialization happens in Postgres; the pool only bounds how
/// many requests can hold a connection at once.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect(&config.url)
        .await
}
