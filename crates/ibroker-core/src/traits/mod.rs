//! Core traits defined in `ibroker-core` and implemented by other crates.

pub mod repository;

pub use repository::CatalogRepository;
