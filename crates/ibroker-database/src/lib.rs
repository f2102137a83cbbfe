//! # ibroker-database
//!
//! PostgreSQL connection management and the catalog repository
//! implementations: one generic over every entity backed by `sqlx`, and an
//! in-process store for development and tests.

pub mod connection;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{MemoryCatalogRepository, PgCatalogRepository};
