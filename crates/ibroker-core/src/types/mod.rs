//! Core type definitions used across the iBroker workspace.

pub mod field;
pub mod filter;
pub mod pagination;

pub use field::{FieldKind, FieldSpec, FieldValue, SqlField};
pub use filter::{FilterOp, FilterPredicate, FilterRegistry, ResolvedFilter, parse_query};
pub use pagination::{Page, PageEnvelope, PageRequest, PaginationMeta, PaginationState};
