//! Service layer for the agent-configuration catalog.
//! - `repository`: one generic CRUD repository over SeaORM, shared by every entity.
//! - `query`: immutable query specifications (filters, ordering, limit).
//! - `agent_template` / `model_provider`: entity services composing the repository.

pub mod errors;
pub mod query;
pub mod repository;
pub mod agent_template;
pub mod model_provider;
#[cfg(test)]
pub mod test_support;

pub use common::pagination::{Page, Pagination};
