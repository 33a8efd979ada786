use std::process::ExitCode;

use common::utils::logging::init_logging;
use configs::{AppConfig, LogFormat};
use migration::MigratorTrait;
use service::{agent_template::TemplateLookupService, model_provider::ProviderCatalogService};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            init_logging(LogFormat::Compact);
            error!(service = "manager", event = "config_invalid", error = %e, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };
    init_logging(cfg.logging.format);
    info!(service = "manager", event = "start", version = env!("CARGO_PKG_VERSION"), "agent manager starting");

    match run(cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "manager", event = "run_failed", error = %e, "agent manager failed");
            ExitCode::FAILURE
        }
    }
}

/// Migrate the schema, make sure a default template exists, and print it.
async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!(event = "migrated", "schema up to date");

    let templates = TemplateLookupService::with_db(db.clone());
    let providers = ProviderCatalogService::with_db(db);

    let default = match templates.get_default_template().await? {
        Some(t) => t,
        None => {
            warn!(event = "default_template_missing", "no agent template found; seeding one");
            let seed = models::agent_template::new_template("default", "Default Assistant", 0)?;
            templates.create(seed).await?
        }
    };

    info!(
        template_id = %default.id,
        agent_code = %default.agent_code,
        sort = default.sort,
        providers = providers.count().await?,
        "catalog_ready"
    );
    println!("{}", serde_json::to_string_pretty(&default)?);
    Ok(())
}
