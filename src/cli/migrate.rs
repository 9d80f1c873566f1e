use community::Config;
use sqlx::migrate::MigrateDatabase;

#[tracing::instrument(skip(config))]
pub async fn migrate(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Running database migrations...");

    let pool = community::db::create_pool(&config.database.url, 1).await?;
    community_db::migrate(&pool).await?;
    pool.close().await;

    tracing::info!("Migrations completed successfully");

    Ok(())
}

#[tracing::instrument(skip(config))]
pub async fn reset(config: &Config) -> anyhow::Result<()> {
    tracing::info!("Resetting database...");

    if sqlx::Sqlite::database_exists(&config.database.url).await? {
        tracing::warn!("Dropping existing database: {}", config.database.url);
        sqlx::Sqlite::drop_database(&config.database.url).await?;
    } else {
        tracing::info!("Database does not exist, nothing to drop");
    }

    migrate(config).await?;

    tracing::info!("Database reset completed successfully");

    Ok(())
}
