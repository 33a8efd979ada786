use std::marker::PhantomData;

use async_trait::async_trait;
use common::pagination::{Page, Pagination};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Iterable,
    PaginatorTrait, PrimaryKeyToColumn, PrimaryKeyTrait, QueryOrder,
};
use tracing::debug;

use crate::errors::ServiceError;
use crate::query::QuerySpec;

/// Primary key value of entity `E`.
pub type PrimaryKeyOf<E> = <<E as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

/// Repository abstraction shared by every catalog entity.
#[async_trait]
pub trait CrudRepository<E: EntityTrait>: Send + Sync {
    async fn create(&self, model: E::Model) -> Result<E::Model, ServiceError>;
    async fn get(&self, id: PrimaryKeyOf<E>) -> Result<Option<E::Model>, ServiceError>;
    /// Overwrite every column of the row with `model`'s primary key.
    async fn update(&self, model: E::Model) -> Result<E::Model, ServiceError>;
    /// Returns whether a row was removed.
    async fn delete(&self, id: PrimaryKeyOf<E>) -> Result<bool, ServiceError>;
    async fn list(&self) -> Result<Vec<E::Model>, ServiceError>;
    async fn page(&self, opts: Pagination) -> Result<Page<E::Model>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
    async fn find_one(&self, spec: &QuerySpec<E::Column>) -> Result<Option<E::Model>, ServiceError>;
    async fn find_many(&self, spec: &QuerySpec<E::Column>) -> Result<Vec<E::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation, usable with any entity.
pub struct SeaOrmRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> SeaOrmRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _entity: PhantomData }
    }
}

#[async_trait]
impl<E> CrudRepository<E> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: Send + Sync,
{
    async fn create(&self, model: E::Model) -> Result<E::Model, ServiceError> {
        let created = model.into_active_model().insert(&self.db).await?;
        Ok(created)
    }

    async fn get(&self, id: PrimaryKeyOf<E>) -> Result<Option<E::Model>, ServiceError> {
        Ok(E::find_by_id(id).one(&self.db).await?)
    }

    async fn update(&self, model: E::Model) -> Result<E::Model, ServiceError> {
        let mut am = model.into_active_model();
        for column in E::Column::iter() {
            am.reset(column);
        }
        match am.update(&self.db).await {
            Ok(updated) => Ok(updated),
            Err(DbErr::RecordNotUpdated) => {
                let table = E::default().table_name().to_string();
                debug!(%table, "update_matched_no_row");
                Err(ServiceError::not_found(&table))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: PrimaryKeyOf<E>) -> Result<bool, ServiceError> {
        let res = E::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn list(&self) -> Result<Vec<E::Model>, ServiceError> {
        Ok(E::find().all(&self.db).await?)
    }

    async fn page(&self, opts: Pagination) -> Result<Page<E::Model>, ServiceError> {
        let (page_idx, per_page) = opts.normalize();
        // order by primary key so pages are stable between calls
        let mut select = E::find();
        for key in E::PrimaryKey::iter() {
            select = select.order_by_asc(key.into_column());
        }
        let paginator = select.paginate(&self.db, per_page);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page_idx).await?;
        Ok(Page::new(items, opts, total))
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        Ok(E::find().count(&self.db).await?)
    }

    async fn find_one(&self, spec: &QuerySpec<E::Column>) -> Result<Option<E::Model>, ServiceError> {
        Ok(spec.apply(E::find()).one(&self.db).await?)
    }

    async fn find_many(&self, spec: &QuerySpec<E::Column>) -> Result<Vec<E::Model>, ServiceError> {
        Ok(spec.apply(E::find()).all(&self.db).await?)
    }
}
