/// Database migration runner
///
/// Schema creation is idempotent and runs at process startup. Migrations
/// live in the `migrations/` directory of this crate and are embedded at
/// compile time via `sqlx::migrate!`.
///
/// # Example
///
/// ```no_run
/// use chorequest_shared::db::pool::{create_pool, DatabaseConfig};
/// use chorequest_shared::db::migrations::{ensure_database_exists, run_migrations};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let url = std::env::var("DATABASE_URL")?;
///     ensure_database_exists(&url).await?;
///
///     let pool = create_pool(DatabaseConfig { url, ..Default::default() }).await?;
///     run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

use sqlx::{migrate::MigrateDatabase, postgres::PgPool, Postgres};
use tracing::{info, warn};

/// Creates the database if it does not exist yet
///
/// Safe to call on every startup; an existing database is left untouched.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), sqlx::Error> {
    if Postgres::database_exists(database_url).await? {
        return Ok(());
    }

    info!("Database does not exist, creating it");
    Postgres::create_database(database_url).await
}

/// Runs all pending database migrations
///
/// Already-applied migrations are skipped, so repeated startups are no-ops.
///
/// # Errors
///
/// Returns an error if a migration file fails to execute or the database
/// connection is lost mid-migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}
