use sqlx::{postgres::PgPoolOptions, Pool, Postgres};
use tracing::{error, info, warn};

use crate::config::DatabaseConfig;

#[derive(Clone)]
pub struct Database {
    pub pool: Pool<Postgres>,
}

impl Database {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(config.acquire_timeout())
            .connect(&config.url)
            .await?;

        Ok(Database { pool })
    }

    /// Blocks startup until the database answers, trying up to
    /// `connect_attempts` times with a fixed delay in between.
    pub async fn connect_with_retry(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let attempts = config.connect_attempts.max(1);
        let mut attempt = 1;

        loop {
            match Self::new(config).await {
                Ok(db) => {
                    info!("Database connection established (attempt {}/{})", attempt, attempts);
                    return Ok(db);
                }
                Err(e) if attempt < attempts => {
                    warn!(
                        "Waiting for database to be ready (attempt {}/{}): {}",
                        attempt, attempts, e
                    );
                    tokio::time::sleep(config.connect_retry_delay()).await;
                    attempt += 1;
                }
                Err(e) => {
                    error!("Database unreachable after {} attempts: {:?}", attempts, e);
                    return Err(e);
                }
            }
        }
    }

    pub async fn run_migrations(&self) -> Result<(), sqlx::migrate::MigrateError> {
        info!("Running database migrations...");
        sqlx::migrate!("./src/migrations")
            .run(&self.pool)
            .await?;
        info!("Migrations completed");
        Ok(())
    }
}
