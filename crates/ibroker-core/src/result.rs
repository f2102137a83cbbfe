//! Convenience result type alias for iBroker.

use crate::error::AppError;

/// A specialized `Result` type for iBroker operations.
pub type AppResult<T> = Result<T, AppError>;
