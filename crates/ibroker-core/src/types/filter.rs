//! Query-string filter translation.
//!
//! A list request such as `?price_gt=100&name=Acme` is turned into
//! [`FilterPredicate`]s by [`parse_query`]. Predicates are not checked at
//! parse time; [`FilterRegistry::apply`] later keeps only the fields an
//! entity declares filterable and drops the rest without error.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AppError;
use crate::result::AppResult;
use crate::types::field::{FieldSpec, FieldValue};

/// Filter comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// `=`, used when the key carries no operator suffix.
    Equal,
    /// `<`, suffix `_lt`.
    LessThan,
    /// `<=`, suffix `_lte`.
    LessThanOrEqual,
    /// `>`, suffix `_gt`.
    GreaterThan,
    /// `>=`, suffix `_gte`.
    GreaterThanOrEqual,
}

impl FilterOp {
    /// Map a key suffix to an operator. Only `gt`, `lt`, `lte` and `gte` are recognised.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "gt" => Some(Self::GreaterThan),
            "lt" => Some(Self::LessThan),
            "lte" => Some(Self::LessThanOrEqual),
            "gte" => Some(Self::GreaterThanOrEqual),
            _ => None,
        }
    }

    /// Return the SQL comparison operator.
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanOrEqual => ">=",
        }
    }

    /// Whether `column.cmp(value)` satisfies this operator.
    pub fn accepts(&self, ordering: Ordering) -> bool {
        match self {
            Self::Equal => ordering == Ordering::Equal,
            Self::LessThan => ordering == Ordering::Less,
            Self::LessThanOrEqual => ordering != Ordering::Greater,
            Self::GreaterThan => ordering == Ordering::Greater,
            Self::GreaterThanOrEqual => ordering != Ordering::Less,
        }
    }
}

impl fmt::Display for FilterOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_sql())
    }
}

/// One `field operator value` constraint taken from the query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPredicate {
    /// Logical field name.
    pub field: String,
    /// Comparison operator.
    pub op: FilterOp,
    /// Raw, untyped value.
    pub value: String,
}

impl FilterPredicate {
    /// Create a predicate.
    pub fn new(field: impl Into<String>, op: FilterOp, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            op,
            value: value.into(),
        }
    }

    /// Parse a single `key=value` pair. Returns `None` for an empty value.
    pub fn parse(key: &str, value: &str) -> Option<Self> {
        if value.is_empty() {
            return None;
        }
        let (field, op) = split_key(key);
        Some(Self::new(field, op, value))
    }
}

/// Split a query key into its field name and operator.
///
/// Only a trailing `_gt`, `_lt`, `_lte` or `_gte` is an operator; anything
/// else (including `delivery_place`) is a plain field compared with `=`.
pub fn split_key(key: &str) -> (&str, FilterOp) {
    match key.rsplit_once('_') {
        Some((field, suffix)) if !field.is_empty() => match FilterOp::from_suffix(suffix) {
            Some(op) => (field, op),
            None => (key, FilterOp::Equal),
        },
        _ => (key, FilterOp::Equal),
    }
}

/// Parse decoded query pairs into predicates.
///
/// The first occurrence of a key wins; pairs with empty values are skipped.
pub fn parse_query<I, K, V>(pairs: I) -> Vec<FilterPredicate>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut predicates = Vec::new();

    for (key, value) in pairs {
        let key = key.as_ref();
        if !seen.insert(key.to_string()) {
            continue;
        }
        if let Some(predicate) = FilterPredicate::parse(key, value.as_ref()) {
            predicates.push(predicate);
        }
    }

    predicates
}

/// A predicate that passed the allow-list, bound to its column descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFilter {
    /// The column being compared.
    pub field: FieldSpec,
    /// Comparison operator.
    pub op: FilterOp,
    /// Raw value, still untyped.
    pub value: String,
}

impl ResolvedFilter {
    /// Coerce the raw value to the column's native type.
    pub fn typed_value(&self) -> AppResult<FieldValue> {
        self.field.kind.coerce(&self.value).ok_or_else(|| {
            AppError::validation(format!(
                "Invalid {} value '{}' for filter '{}'",
                self.field.kind, self.value, self.field.name
            ))
        })
    }
}

/// Static allow-list of filterable fields for one entity type.
#[derive(Debug, Clone, Copy)]
pub struct FilterRegistry {
    fields: &'static [FieldSpec],
    allowed: &'static [&'static str],
}

impl FilterRegistry {
    /// Build a registry from an entity's column set and the names it allows.
    pub const fn new(fields: &'static [FieldSpec], allowed: &'static [&'static str]) -> Self {
        Self { fields, allowed }
    }

    /// Names of the filterable fields.
    pub fn allowed(&self) -> &'static [&'static str] {
        self.allowed
    }

    /// Look up an allowed field's descriptor.
    pub fn resolve(&self, name: &str) -> Option<FieldSpec> {
        if !self.allowed.iter().any(|allowed| *allowed == name) {
            return None;
        }
        self.fields.iter().find(|spec| spec.name == name).copied()
    }

    /// Keep predicates on allowed fields, dropping the others silently.
    pub fn apply(&self, predicates: &[FilterPredicate]) -> Vec<ResolvedFilter> {
        predicates
            .iter()
            .filter_map(|predicate| match self.resolve(&predicate.field) {
                Some(field) => Some(ResolvedFilter {
                    field,
                    op: predicate.op,
                    value: predicate.value.clone(),
                }),
                None => {
                    debug!(field = %predicate.field, "Ignoring filter on non-filterable field");
                    None
                }
            })
            .collect()
    }
}
