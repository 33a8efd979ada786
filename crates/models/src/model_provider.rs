//! Model providers (`ai_model_provider`).

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::Iterable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

/// Kind of model a provider serves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum ModelType {
    #[sea_orm(string_value = "ASR")]
    Asr,
    #[sea_orm(string_value = "VAD")]
    Vad,
    #[sea_orm(string_value = "LLM")]
    Llm,
    #[sea_orm(string_value = "VLLM")]
    Vllm,
    #[sea_orm(string_value = "TTS")]
    Tts,
    #[sea_orm(string_value = "Memory")]
    Memory,
    #[sea_orm(string_value = "Intent")]
    Intent,
}

impl ModelType {
    pub fn code(&self) -> &'static str {
        match self {
            ModelType::Asr => "ASR",
            ModelType::Vad => "VAD",
            ModelType::Llm => "LLM",
            ModelType::Vllm => "VLLM",
            ModelType::Tts => "TTS",
            ModelType::Memory => "Memory",
            ModelType::Intent => "Intent",
        }
    }

    /// Parse a type code, ignoring ASCII case and surrounding whitespace.
    pub fn from_code(code: &str) -> Result<Self, errors::ModelError> {
        ModelType::iter()
            .find(|t| t.code().eq_ignore_ascii_case(code.trim()))
            .ok_or_else(|| errors::ModelError::Validation(format!("unknown model_type: {code}")))
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_model_provider")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub model_type: ModelType,
    pub provider_code: String,
    pub name: String,
    /// Descriptors of the provider's configuration fields
    pub fields: Json,
    pub sort: i32,
    pub creator: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updater: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Build a fresh provider with a new id and current timestamps.
pub fn new_provider(model_type: ModelType, provider_code: &str, name: &str, fields: Json, sort: i32) -> Model {
    let now = Utc::now().into();
    Model {
        id: Uuid::new_v4(),
        model_type,
        provider_code: provider_code.to_string(),
        name: name.to_string(),
        fields,
        sort,
        creator: None,
        created_at: now,
        updater: None,
        updated_at: now,
    }
}
