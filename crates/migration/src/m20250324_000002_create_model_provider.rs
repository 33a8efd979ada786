//! Create `ai_model_provider` table.
//!
//! One row per provider implementation of a model kind, with the descriptors
//! of its configuration fields stored as JSON.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ModelProvider::Table)
                    .if_not_exists()
                    .col(uuid(ModelProvider::Id).primary_key())
                    .col(string_len(ModelProvider::ModelType, 20).not_null())
                    .col(string_len(ModelProvider::ProviderCode, 50).not_null())
                    .col(string_len(ModelProvider::Name, 50).not_null())
                    .col(json(ModelProvider::Fields).not_null())
                    .col(integer(ModelProvider::Sort).not_null().default(0))
                    .col(ColumnDef::new(ModelProvider::Creator).string_len(64).null())
                    .col(timestamp_with_time_zone(ModelProvider::CreatedAt).not_null())
                    .col(ColumnDef::new(ModelProvider::Updater).string_len(64).null())
                    .col(timestamp_with_time_zone(ModelProvider::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(ModelProvider::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum ModelProvider {
    #[sea_orm(iden = "ai_model_provider")]
    Table,
    Id,
    ModelType,
    ProviderCode,
    Name,
    Fields,
    Sort,
    Creator,
    CreatedAt,
    Updater,
    UpdatedAt,
}
