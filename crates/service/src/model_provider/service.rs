use std::sync::Arc;

use common::pagination::{Page, Pagination};
use models::model_provider;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::errors::ServiceError;
use crate::repository::{CrudRepository, SeaOrmRepository};

/// Model provider catalog. Pure pass-through to the repository: no
/// validation or extra rules are applied here.
pub struct ProviderCatalogService<R: CrudRepository<model_provider::Entity>> {
    repo: Arc<R>,
}

impl ProviderCatalogService<SeaOrmRepository<model_provider::Entity>> {
    pub fn with_db(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmRepository::new(db)))
    }
}

impl<R: CrudRepository<model_provider::Entity>> ProviderCatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn create(&self, provider: model_provider::Model) -> Result<model_provider::Model, ServiceError> {
        self.repo.create(provider).await
    }

    pub async fn get(&self, id: Uuid) -> Result<Option<model_provider::Model>, ServiceError> { self.repo.get(id).await }

    pub async fn update(&self, provider: model_provider::Model) -> Result<model_provider::Model, ServiceError> {
        self.repo.update(provider).await
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> { self.repo.delete(id).await }

    pub async fn list(&self) -> Result<Vec<model_provider::Model>, ServiceError> { self.repo.list().await }

    pub async fn page(&self, opts: Pagination) -> Result<Page<model_provider::Model>, ServiceError> {
        self.repo.page(opts).await
    }

    pub async fn count(&self) -> Result<u64, ServiceError> { self.repo.count().await }
}
