//! Create `ai_agent_template` table.
//!
//! Baseline agent configurations; the row with the lowest `sort` is the default.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgentTemplate::Table)
                    .if_not_exists()
                    .col(uuid(AgentTemplate::Id).primary_key())
                    .col(string_len(AgentTemplate::AgentCode, 36).not_null())
                    .col(string_len(AgentTemplate::AgentName, 64).not_null())
                    .col(ColumnDef::new(AgentTemplate::AsrModelId).string_len(32).null())
                    .col(ColumnDef::new(AgentTemplate::VadModelId).string_len(64).null())
                    .col(ColumnDef::new(AgentTemplate::LlmModelId).string_len(32).null())
                    .col(ColumnDef::new(AgentTemplate::VllmModelId).string_len(32).null())
                    .col(ColumnDef::new(AgentTemplate::TtsModelId).string_len(32).null())
                    .col(ColumnDef::new(AgentTemplate::TtsVoiceId).string_len(32).null())
                    .col(ColumnDef::new(AgentTemplate::MemModelId).string_len(32).null())
                    .col(ColumnDef::new(AgentTemplate::IntentModelId).string_len(32).null())
                    .col(integer(AgentTemplate::ChatHistoryConf).not_null().default(0))
                    .col(ColumnDef::new(AgentTemplate::SystemPrompt).text().null())
                    .col(ColumnDef::new(AgentTemplate::SummaryMemory).text().null())
                    .col(ColumnDef::new(AgentTemplate::LangCode).string_len(10).null())
                    .col(ColumnDef::new(AgentTemplate::Language).string_len(10).null())
                    .col(integer(AgentTemplate::Sort).not_null().default(0))
                    .col(ColumnDef::new(AgentTemplate::Creator).string_len(64).null())
                    .col(timestamp_with_time_zone(AgentTemplate::CreatedAt).not_null())
                    .col(ColumnDef::new(AgentTemplate::Updater).string_len(64).null())
                    .col(timestamp_with_time_zone(AgentTemplate::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(AgentTemplate::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum AgentTemplate {
    #[sea_orm(iden = "ai_agent_template")]
    Table,
    Id,
    AgentCode,
    AgentName,
    AsrModelId,
    VadModelId,
    LlmModelId,
    VllmModelId,
    TtsModelId,
    TtsVoiceId,
    MemModelId,
    IntentModelId,
    ChatHistoryConf,
    SystemPrompt,
    SummaryMemory,
    LangCode,
    Language,
    Sort,
    Creator,
    CreatedAt,
    Updater,
    UpdatedAt,
}
