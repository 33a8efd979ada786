use sea_orm::DbErr;
use thiserror::Error;

/// Errors surfaced by repositories and services.
///
/// Storage failures keep the original `DbErr` so callers see exactly what the
/// database reported.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }
}
