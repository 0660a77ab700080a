#[cfg(test)]
use sqlx::{postgres::PgPoolOptions, PgPool};

/// Connect to the database named by DATABASE_URL and apply migrations.
///
/// Used by the store-backed tests, which are ignored by default and run with
/// `cargo test -- --ignored` against a disposable Postgres instance.
#[cfg(test)]
pub async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for database-backed tests");

    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect(&url)
        .await
        .expect("failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run migrations");

    pool
}

/// First seeded category id, for fundraisers created in tests.
#[cfg(test)]
pub async fn any_category_id(pool: &PgPool) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT id FROM categories ORDER BY id LIMIT 1")
        .fetch_one(pool)
        .await
        .expect("seed categories missing")
}
