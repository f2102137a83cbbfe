//! # ibroker-api
//!
//! HTTP API layer for the iBroker catalog built on Axum.
//!
//! Every catalog entity is served by the same generic handlers under
//! `<base>/api/v1`. Also provides the health endpoint, middleware (CORS,
//! request logging), extractors and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use router::catalog_router;
pub use state::{AppState, Backend, CatalogState};
