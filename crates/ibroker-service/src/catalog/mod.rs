//! Generic CRUD service for catalog entities.

pub mod service;

pub use service::CatalogService;
