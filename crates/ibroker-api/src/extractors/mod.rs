//! Custom Axum extractors.

pub mod json;
pub mod list_query;
pub mod path;

pub use json::CatalogJson;
pub use list_query::ListQuery;
pub use path::CatalogId;
