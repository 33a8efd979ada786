//! Shared utilities for the catalog crates: logging setup and pagination.

pub mod utils;
pub mod pagination;
