//! # ibroker-core
//!
//! Core crate for the iBroker catalog service. Contains the configuration
//! schema, the unified error system, the query-string filter translator,
//! the pagination calculator, and the repository trait implemented by the
//! persistence crate.
//!
//! This crate has **no** internal dependencies on other iBroker crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
