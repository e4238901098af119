use anyhow::Result;

use crate::config::Config;

#[tracing::instrument(skip(config))]
pub async fn migrate(config: &Config) -> Result<()> {
    tracing::info!("Running database migrations...");

    let pool =
        crate::db::create_pool(&config.database.url, config.database.max_connections).await?;
    crate::db::migrate(&pool).await?;

    tracing::info!(url = %config.database.url, "Migrations completed successfully");

    Ok(())
}
