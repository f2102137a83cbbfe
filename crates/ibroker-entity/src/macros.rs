//! Declarative generator for catalog entities.

/// Declare a catalog entity.
///
/// Expands to the row struct (with an `id: i64` primary key), its create,
/// patch and response types, and the [`CatalogEntity`](crate::CatalogEntity)
/// implementation. JSON names are camelCase; column and filter names are
/// the Rust field names.
///
/// Crates invoking the macro must depend on `serde` and `sqlx` directly.
///
/// ```ignore
/// catalog_entity! {
///     /// A measurement unit.
///     pub struct MeasureUnit {
///         /// Free-text description.
///         pub description: String,
///         /// Display name.
///         pub persian_name: String,
///     }
///     table = "measure_units",
///     label = "measure unit",
///     filterable = ["id", "persian_name"],
///     create = CreateMeasureUnit,
///     patch = PatchMeasureUnit,
///     response = MeasureUnitResponse,
/// }
/// ```
#[macro_export]
macro_rules! catalog_entity {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                pub $field:ident : $ty:ty
            ),+ $(,)?
        }
        table = $table:literal,
        label = $label:literal,
        filterable = [$($filter:literal),* $(,)?],
        create = $create:ident,
        patch = $patch:ident,
        response = $response:ident $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize, ::sqlx::FromRow)]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            /// Primary key.
            pub id: i64,
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Request body for creating or replacing a ", $label, ".")]
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $create {
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        #[doc = concat!("Partial update of a ", $label, ". Absent fields are left unchanged.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase", default)]
        pub struct $patch {
            $(
                $(#[$field_meta])*
                pub $field: ::std::option::Option<$ty>,
            )+
        }

        #[doc = concat!("Response body for a ", $label, ".")]
        #[derive(Debug, Clone, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub struct $response {
            /// Primary key.
            pub id: i64,
            $(
                $(#[$field_meta])*
                pub $field: $ty,
            )+
        }

        impl ::std::convert::From<$name> for $response {
            fn from(row: $name) -> Self {
                Self {
                    id: row.id,
                    $( $field: row.$field, )+
                }
            }
        }

        impl $crate::CatalogEntity for $name {
            type Create = $create;
            type Patch = $patch;
            type Response = $response;

            const TABLE: &'static str = $table;
            const LABEL: &'static str = $label;
            const FIELDS: &'static [$crate::FieldSpec] = &[
                $crate::FieldSpec::new("id", $crate::FieldKind::Integer),
                $(
                    $crate::FieldSpec::new(
                        stringify!($field),
                        <$ty as $crate::SqlField>::KIND,
                    ),
                )+
            ];
            const FILTERABLE: &'static [&'static str] = &[$($filter),*];

            fn id(&self) -> i64 {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = id;
            }

            fn values(&self) -> ::std::vec::Vec<$crate::FieldValue> {
                ::std::vec![$( $crate::SqlField::to_field_value(&self.$field), )+]
            }

            fn from_create(id: i64, input: $create) -> Self {
                Self {
                    id,
                    $( $field: input.$field, )+
                }
            }

            fn apply_patch(&mut self, patch: $patch) {
                $(
                    if let ::std::option::Option::Some(value) = patch.$field {
                        self.$field = value;
                    }
                )+
            }
        }
    };
}
