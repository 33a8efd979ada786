//! Agent configuration templates (`ai_agent_template`).
//!
//! A template is the baseline an agent is created from: which model of each
//! kind it uses, its prompt and language. The row with the lowest `sort` is
//! the default template.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ai_agent_template")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub agent_code: String,
    pub agent_name: String,
    pub asr_model_id: Option<String>,
    pub vad_model_id: Option<String>,
    pub llm_model_id: Option<String>,
    pub vllm_model_id: Option<String>,
    pub tts_model_id: Option<String>,
    pub tts_voice_id: Option<String>,
    pub mem_model_id: Option<String>,
    pub intent_model_id: Option<String>,
    /// 0 = no history, 1 = text only, 2 = text and audio
    pub chat_history_conf: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub system_prompt: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub summary_memory: Option<String>,
    pub lang_code: Option<String>,
    pub language: Option<String>,
    pub sort: i32,
    pub creator: Option<String>,
    pub created_at: DateTimeWithTimeZone,
    pub updater: Option<String>,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_code(code: &str) -> Result<(), errors::ModelError> {
    if code.trim().is_empty() {
        return Err(errors::ModelError::Validation("agent_code required".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("agent_name required".into()));
    }
    Ok(())
}

/// Build a fresh template with a new id and current timestamps.
/// Model ids, prompt and language are left unset.
pub fn new_template(agent_code: &str, agent_name: &str, sort: i32) -> Result<Model, errors::ModelError> {
    validate_code(agent_code)?;
    validate_name(agent_name)?;
    let now = Utc::now().into();
    Ok(Model {
        id: Uuid::new_v4(),
        agent_code: agent_code.to_string(),
        agent_name: agent_name.to_string(),
        asr_model_id: None,
        vad_model_id: None,
        llm_model_id: None,
        vllm_model_id: None,
        tts_model_id: None,
        tts_voice_id: None,
        mem_model_id: None,
        intent_model_id: None,
        chat_history_conf: 0,
        system_prompt: None,
        summary_memory: None,
        lang_code: None,
        language: None,
        sort,
        creator: None,
        created_at: now,
        updater: None,
        updated_at: now,
    })
}
