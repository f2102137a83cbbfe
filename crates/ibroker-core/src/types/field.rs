//! Column descriptors and typed column values.
//!
//! Entities describe their columns with [`FieldSpec`]s. Filter values
//! arrive as opaque text and are coerced into a [`FieldValue`] of the
//! column's [`FieldKind`] by the persistence layer.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Native type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// 64-bit signed integer (`BIGINT`).
    Integer,
    /// Free text (`TEXT` / `VARCHAR`).
    Text,
    /// Boolean flag.
    Boolean,
    /// Point in time (`TIMESTAMPTZ`).
    Timestamp,
}

impl FieldKind {
    /// Coerce raw query text into a value of this kind.
    ///
    /// Text is kept verbatim; other kinds ignore surrounding whitespace.
    /// Timestamps accept RFC 3339 or a bare `YYYY-MM-DD` date (midnight UTC).
    pub fn coerce(&self, raw: &str) -> Option<FieldValue> {
        match self {
            Self::Text => Some(FieldValue::Text(raw.to_string())),
            Self::Integer => raw.trim().parse::<i64>().ok().map(FieldValue::Integer),
            Self::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" => Some(FieldValue::Boolean(true)),
                "false" | "0" => Some(FieldValue::Boolean(false)),
                _ => None,
            },
            Self::Timestamp => {
                let raw = raw.trim();
                DateTime::parse_from_rfc3339(raw)
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok()
                    .or_else(|| {
                        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                            .ok()
                            .and_then(|d| d.and_hms_opt(0, 0, 0))
                            .map(|naive| naive.and_utc())
                    })
                    .map(FieldValue::Timestamp)
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => write!(f, "integer"),
            Self::Text => write!(f, "text"),
            Self::Boolean => write!(f, "boolean"),
            Self::Timestamp => write!(f, "timestamp"),
        }
    }
}

/// A named column and its native type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Column name, also the logical filter name.
    pub name: &'static str,
    /// Native type.
    pub kind: FieldKind,
}

impl FieldSpec {
    /// Create a field descriptor.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// A typed column value, used for binding and in-memory comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// An integer value.
    Integer(i64),
    /// A string value.
    Text(String),
    /// A boolean value.
    Boolean(bool),
    /// A timestamp value.
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    /// The kind of this value.
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Integer(_) => FieldKind::Integer,
            Self::Text(_) => FieldKind::Text,
            Self::Boolean(_) => FieldKind::Boolean,
            Self::Timestamp(_) => FieldKind::Timestamp,
        }
    }

    /// Compare two values of the same kind. Mixed kinds are unordered.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => Some(a.cmp(b)),
            (Self::Text(a), Self::Text(b)) => Some(a.cmp(b)),
            (Self::Boolean(a), Self::Boolean(b)) => Some(a.cmp(b)),
            (Self::Timestamp(a), Self::Timestamp(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

/// Rust types that can be stored in a catalog column.
pub trait SqlField {
    /// The column kind this type maps to.
    const KIND: FieldKind;

    /// Convert into a bindable value.
    fn to_field_value(&self) -> FieldValue;
}

impl SqlField for i64 {
    const KIND: FieldKind = FieldKind::Integer;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl SqlField for String {
    const KIND: FieldKind = FieldKind::Text;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl SqlField for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl SqlField for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Timestamp;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Timestamp(*self)
    }
}
