use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Iterable, QueryFilter, QueryOrder,
};
use serde_json::json;

use crate::{agent_template, db, errors::ModelError, model_provider::{self, ModelType}};

/// Fresh in-memory SQLite database with all migrations applied.
async fn setup_test_db() -> Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig { url: "sqlite::memory:".into(), ..Default::default() };
    let db = db::connect_with_config(&cfg).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[test]
fn new_template_rejects_blank_code_and_name() {
    assert_eq!(
        agent_template::new_template("  ", "Assistant", 0).unwrap_err(),
        ModelError::Validation("agent_code required".into())
    );
    assert!(agent_template::new_template("assistant", "", 0).is_err());

    let t = agent_template::new_template("assistant", "Assistant", 3).unwrap();
    assert_eq!(t.sort, 3);
    assert_eq!(t.created_at, t.updated_at);
    assert!(t.llm_model_id.is_none());
}

#[test]
fn model_type_parses_case_insensitively() {
    assert_eq!(ModelType::from_code("asr").unwrap(), ModelType::Asr);
    assert_eq!(ModelType::from_code(" Memory ").unwrap(), ModelType::Memory);
    assert_eq!(ModelType::from_code("vllm").unwrap(), ModelType::Vllm);
    assert!(ModelType::from_code("speech").is_err());
    assert_eq!(ModelType::Intent.code(), "Intent");
}

#[test]
fn every_model_type_code_parses_back() {
    for t in ModelType::iter() {
        assert_eq!(ModelType::from_code(&t.code().to_lowercase()).unwrap(), t);
    }
}

#[tokio::test]
async fn agent_template_persists_all_columns() -> Result<()> {
    let db = setup_test_db().await?;

    let mut t = agent_template::new_template("tpl_default", "Default Assistant", 1)?;
    t.llm_model_id = Some("LLM_ChatGLMLLM".into());
    t.system_prompt = Some("You are a helpful voice assistant.".into());
    t.lang_code = Some("en".into());
    let inserted = t.clone().into_active_model().insert(&db).await?;
    assert_eq!(inserted.id, t.id);

    let found = agent_template::Entity::find_by_id(t.id).one(&db).await?.unwrap();
    assert_eq!(found.agent_code, "tpl_default");
    assert_eq!(found.llm_model_id.as_deref(), Some("LLM_ChatGLMLLM"));
    assert_eq!(found.system_prompt, t.system_prompt);
    assert_eq!(found.sort, 1);
    Ok(())
}

#[tokio::test]
async fn model_provider_stores_type_and_fields() -> Result<()> {
    let db = setup_test_db().await?;

    let fields = json!([{ "key": "api_key", "label": "API key", "type": "string" }]);
    let p = model_provider::new_provider(ModelType::Tts, "elevenlabs", "ElevenLabs TTS", fields.clone(), 2);
    p.clone().into_active_model().insert(&db).await?;
    let other = model_provider::new_provider(ModelType::Asr, "elevenlabs", "ElevenLabs ASR", json!([]), 1);
    other.into_active_model().insert(&db).await?;

    let tts = model_provider::Entity::find()
        .filter(model_provider::Column::ModelType.eq(ModelType::Tts))
        .all(&db)
        .await?;
    assert_eq!(tts.len(), 1);
    assert_eq!(tts[0].fields, fields);
    assert_eq!(tts[0].provider_code, "elevenlabs");

    let ordered = model_provider::Entity::find()
        .order_by_asc(model_provider::Column::Sort)
        .all(&db)
        .await?;
    assert_eq!(ordered[0].model_type, ModelType::Asr);
    Ok(())
}

#[tokio::test]
async fn duplicate_provider_code_per_type_is_rejected() -> Result<()> {
    let db = setup_test_db().await?;

    let a = model_provider::new_provider(ModelType::Llm, "openai", "OpenAI", json!([]), 0);
    a.into_active_model().insert(&db).await?;
    let b = model_provider::new_provider(ModelType::Llm, "openai", "OpenAI again", json!([]), 1);
    assert!(b.into_active_model().insert(&db).await.is_err());
    Ok(())
}
