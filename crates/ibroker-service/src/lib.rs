//! # ibroker-service
//!
//! Service layer for the iBroker catalog. A [`CatalogService`] sits between
//! the HTTP handlers and a catalog repository: it applies the entity's
//! filter allow-list and turns missing rows into not-found errors.
//!
//! Services follow constructor injection; repositories are provided at
//! construction time as `Arc` trait objects.

pub mod catalog;

pub use catalog::CatalogService;
