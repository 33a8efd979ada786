#![cfg(test)]
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use models::db::connect_with_config;

/// Fresh in-memory SQLite database with migrations applied.
/// Every call yields an isolated database, so tests never share rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
