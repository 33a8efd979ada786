use std::sync::Arc;

use common::pagination::{Page, Pagination};
use models::agent_template;
use sea_orm::DatabaseConnection;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::query::{Direction, QuerySpec};
use crate::repository::{CrudRepository, SeaOrmRepository};

/// Agent template service: resolves the default template and exposes the
/// generic CRUD operations for templates.
pub struct TemplateLookupService<R: CrudRepository<agent_template::Entity>> {
    repo: Arc<R>,
}

impl TemplateLookupService<SeaOrmRepository<agent_template::Entity>> {
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRepository::new(db)))
    }
}

impl<R: CrudRepository<agent_template::Entity>> TemplateLookupService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Lowest `sort` first; equal sorts resolve to the lowest id.
    pub fn default_template_query() -> QuerySpec<agent_template::Column> {
        QuerySpec::new()
            .order_by(agent_template::Column::Sort, Direction::Asc)
            .order_by(agent_template::Column::Id, Direction::Asc)
            .limit(1)
    }

    /// The template with the lowest `sort`, or `None` when no template exists.
    #[instrument(skip(self))]
    pub async fn get_default_template(&self) -> Result<Option<agent_template::Model>, ServiceError> {
        let found = self.repo.find_one(&Self::default_template_query()).await?;
        match &found {
            Some(t) => debug!(template_id = %t.id, sort = t.sort, "default_template_resolved"),
            None => debug!("default_template_absent"),
        }
        Ok(found)
    }

    pub async fn create(&self, template: agent_template::Model) -> Result<agent_template::Model, ServiceError> {
        self.repo.create(template).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<agent_template::Model>, ServiceError> { self.repo.get(id).await }

    pub async fn update(&self, template: agent_template::Model) -> Result<agent_template::Model, ServiceError> {
        self.repo.update(template).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> { self.repo.delete(id).await }

    pub async fn list(&self) -> Result<Vec<agent_template::Model>, ServiceError> { self.repo.list().await }

    pub async fn page(&self, opts: Pagination) -> Result<Page<agent_template::Model>, ServiceError> {
        self.repo.page(opts).await
    }
}
