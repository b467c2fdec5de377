use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use log::info;
use crate::config::Config;
use crate::errors::AppError;

pub async fn create_pool(database_url: &str, config: &Config) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect(database_url)
        .await
        .map_err(|err| AppError::DatabaseError(format!("Failed to connect to the database: {}", err)))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations applied");
    Ok(())
}
