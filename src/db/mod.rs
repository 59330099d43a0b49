use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, Box<dyn std::error::Error>> {
    let options = config.connect_options()?;

    let pool = PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .idle_timeout(Some(config.idle_timeout))
        .connect_with(options)
        .await?;

    log::info!(
        "Connected to database (max {} connections, idle timeout {:?})",
        config.pool_max,
        config.idle_timeout
    );
    Ok(pool)
}
