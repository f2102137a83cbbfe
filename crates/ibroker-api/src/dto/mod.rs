//! Data transfer objects that are not entity bodies.

pub mod response;

pub use response::HealthResponse;
