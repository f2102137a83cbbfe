//! # ibroker-entity
//!
//! Reference-data entity models for the iBroker catalog. Every entity is
//! declared with [`catalog_entity!`], which derives `sqlx::FromRow` for the
//! row model and generates its create, patch and response types together
//! with the [`CatalogEntity`] implementation.

pub mod catalog;
mod macros;

pub mod commodity;
pub mod hall;
pub mod lookup;
pub mod offer;
pub mod party;
pub mod report;

pub use catalog::CatalogEntity;
pub use ibroker_core::types::{FieldKind, FieldSpec, FieldValue, SqlField};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_filterable_are_columns<E: CatalogEntity>() {
        for name in E::FILTERABLE {
            assert!(
                E::FIELDS.iter().any(|spec| spec.name == *name),
                "{}: filterable field '{name}' is not a column",
                E::TABLE
            );
        }
        assert_eq!(E::FIELDS[0], FieldSpec::new("id", FieldKind::Integer));
        assert_eq!(E::columns().len(), E::FIELDS.len() - 1);
    }

    #[test]
    fn test_every_filterable_field_is_a_column() {
        assert_filterable_are_columns::<party::Broker>();
        assert_filterable_are_columns::<party::Supplier>();
        assert_filterable_are_columns::<party::Manufacturer>();
        assert_filterable_are_columns::<commodity::Commodity>();
        assert_filterable_are_columns::<commodity::MainGroup>();
        assert_filterable_are_columns::<commodity::Group>();
        assert_filterable_are_columns::<commodity::SubGroup>();
        assert_filterable_are_columns::<hall::TradingHall>();
        assert_filterable_are_columns::<hall::GroupHall>();
        assert_filterable_are_columns::<hall::HallMenuGroup>();
        assert_filterable_are_columns::<hall::HallMenuSubGroup>();
        assert_filterable_are_columns::<lookup::BuyMethod>();
        assert_filterable_are_columns::<lookup::ContractType>();
        assert_filterable_are_columns::<lookup::CurrencyUnit>();
        assert_filterable_are_columns::<lookup::DeliveryPlace>();
        assert_filterable_are_columns::<lookup::MeasureUnit>();
        assert_filterable_are_columns::<lookup::OfferMod>();
        assert_filterable_are_columns::<lookup::OfferType>();
        assert_filterable_are_columns::<lookup::PackagingType>();
        assert_filterable_are_columns::<lookup::Settlement>();
        assert_filterable_are_columns::<offer::Offer>();
        assert_filterable_are_columns::<report::Report>();
    }
}
