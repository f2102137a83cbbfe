//! The catalog entity contract shared by persistence, service and HTTP layers.

use std::fmt;

use ibroker_core::types::{FieldSpec, FieldValue, FilterRegistry};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::FromRow;
use sqlx::postgres::PgRow;

/// A reference-data table row with an integer primary key.
///
/// Implementations are normally generated by [`catalog_entity!`](crate::catalog_entity).
pub trait CatalogEntity:
    for<'r> FromRow<'r, PgRow> + Clone + fmt::Debug + Send + Sync + Unpin + 'static
{
    /// Request body for create and full replacement. Every field is required.
    type Create: DeserializeOwned + Send + 'static;
    /// Request body for partial updates. Every field is optional.
    type Patch: DeserializeOwned + Send + 'static;
    /// Response body.
    type Response: Serialize + From<Self> + Send + 'static;

    /// Table name.
    const TABLE: &'static str;
    /// Human-readable name used in error messages.
    const LABEL: &'static str;
    /// All columns, `id` first.
    const FIELDS: &'static [FieldSpec];
    /// Names of the columns that list requests may filter on.
    const FILTERABLE: &'static [&'static str];

    /// Primary key.
    fn id(&self) -> i64;

    /// Assign the primary key.
    fn set_id(&mut self, id: i64);

    /// Writable columns (everything except `id`), in declaration order.
    fn columns() -> &'static [FieldSpec] {
        Self::FIELDS.get(1..).unwrap_or(&[])
    }

    /// Filter allow-list for list requests.
    fn filters() -> FilterRegistry {
        FilterRegistry::new(Self::FIELDS, Self::FILTERABLE)
    }

    /// Values of the writable columns, in the same order as [`columns`](Self::columns).
    fn values(&self) -> Vec<FieldValue>;

    /// Value of a named column, including `id`.
    fn value_of(&self, column: &str) -> Option<FieldValue> {
        if column == "id" {
            return Some(FieldValue::Integer(self.id()));
        }
        let position = Self::columns().iter().position(|spec| spec.name == column)?;
        self.values().into_iter().nth(position)
    }

    /// Build a row from a create request.
    fn from_create(id: i64, input: Self::Create) -> Self;

    /// Overwrite every writable column, keeping the id.
    fn replace(&mut self, input: Self::Create) {
        *self = Self::from_create(self.id(), input);
    }

    /// Overwrite only the columns present in the patch.
    fn apply_patch(&mut self, patch: Self::Patch);
}
