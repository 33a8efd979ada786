//! Migrator registering the catalog tables in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20250322_000001_create_agent_template;
mod m20250324_000002_create_model_provider;
mod m20250324_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250322_000001_create_agent_template::Migration),
            Box::new(m20250324_000002_create_model_provider::Migration),
            // Indexes should always be applied last
            Box::new(m20250324_000003_add_indexes::Migration),
        ]
    }
}
