//! PostgreSQL storage layer: pool management, startup checks, migrations,
//! row models, and repositories.

pub mod gateway;
pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub use gateway::PgLogGateway;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap connectivity check (`SELECT 1`). Also serves as the console's
/// liveness probe via [`PgLogGateway`].
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Startup diagnostics: ask the server for its version and clock, and log
/// what came back. The caller decides whether a failure is fatal.
pub async fn run_diagnostics(pool: &DbPool) -> Result<(), sqlx::Error> {
    let (version, server_time): (String, chrono::DateTime<chrono::Utc>) =
        sqlx::query_as("SELECT version(), now()")
            .fetch_one(pool)
            .await?;

    tracing::info!(%version, %server_time, "Database diagnostics passed");
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
