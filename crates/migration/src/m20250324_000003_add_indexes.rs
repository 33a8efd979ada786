use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // AgentTemplate: default lookup orders by (sort, id)
        manager
            .create_index(
                Index::create()
                    .name("idx_agent_template_sort")
                    .table(AgentTemplate::Table)
                    .col(AgentTemplate::Sort)
                    .col(AgentTemplate::Id)
                    .to_owned(),
            )
            .await?;

        // ModelProvider: composite unique (model_type, provider_code)
        manager
            .create_index(
                Index::create()
                    .name("uniq_model_provider_type_code")
                    .table(ModelProvider::Table)
                    .col(ModelProvider::ModelType)
                    .col(ModelProvider::ProviderCode)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_agent_template_sort").table(AgentTemplate::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_model_provider_type_code").table(ModelProvider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AgentTemplate {
    #[sea_orm(iden = "ai_agent_template")]
    Table,
    Id,
    Sort,
}

#[derive(DeriveIden)]
enum ModelProvider {
    #[sea_orm(iden = "ai_model_provider")]
    Table,
    ModelType,
    ProviderCode,
}
