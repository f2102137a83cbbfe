//! Catalog repository implementations.

pub mod catalog;
pub mod memory;
pub mod sql;

pub use catalog::PgCatalogRepository;
pub use memory::MemoryCatalogRepository;

use ibroker_core::result::AppResult;
use ibroker_core::types::{FieldValue, FilterOp, ResolvedFilter};

/// A filter whose value has been coerced to the column's native type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedFilter {
    /// Column name, always taken from a static entity declaration.
    pub column: &'static str,
    /// Comparison operator.
    pub op: FilterOp,
    /// Typed comparison value.
    pub value: FieldValue,
}

/// Coerce every filter value, failing on the first that does not fit its column.
pub fn coerce_filters(filters: &[ResolvedFilter]) -> AppResult<Vec<TypedFilter>> {
    filters
        .iter()
        .map(|filter| {
            Ok(TypedFilter {
                column: filter.field.name,
                op: filter.op,
                value: filter.typed_value()?,
            })
        })
        .collect()
}
