//! Offer model.

use chrono::{DateTime, Utc};

use crate::catalog_entity;

catalog_entity! {
    /// A commodity offer announced on a trading hall.
    ///
    /// Prices are in the offer's currency unit, volumes in its measure unit.
    pub struct Offer {
        pub buy_method_id: i64,
        pub broker_id: i64,
        pub commodity_id: i64,
        pub contract_type_id: i64,
        pub currency_id: i64,
        pub delivery_place_id: i64,
        /// Opening price.
        pub init_price: i64,
        /// Opening volume as announced.
        pub init_volume: String,
        pub lot_size: i64,
        pub manufacturer_id: i64,
        pub max_init_price: i64,
        /// Maximum allowed increase of the offered volume.
        pub max_inc_offer_vol: i64,
        pub max_order_vol: i64,
        pub max_offer_price: i64,
        pub measure_unit_id: i64,
        pub min_allocation_vol: i64,
        pub min_offer_vol: i64,
        pub min_init_price: i64,
        pub min_order_vol: i64,
        pub min_offer_price: i64,
        pub offer_mode_id: i64,
        pub offer_type_id: i64,
        /// Offered volume.
        pub offer_vol: i64,
        pub packaging_type_id: i64,
        /// Tolerated delivery weight deviation, in percent.
        pub permissible_error: i64,
        pub price_discovery_min_order_vol: i64,
        pub prepayment_percent: i64,
        pub security_type_id: i64,
        pub settlement_type_id: i64,
        pub supplier_id: i64,
        pub tick_size: i64,
        pub trading_hall_id: i64,
        pub weight_factor: i64,
        /// Expected delivery date.
        pub delivery_date: DateTime<Utc>,
        pub description: String,
        /// Trading session date.
        pub offer_date: DateTime<Utc>,
        pub offer_ring: String,
        /// Exchange symbol of the offer.
        pub offer_symbol: String,
        pub security_type_note: String,
        /// Trading status as reported by the exchange.
        pub trade_status: String,
    }
    table = "offers",
    label = "offer",
    filterable = [
        "buy_method_id",
        "broker_id",
        "commodity_id",
        "contract_type_id",
        "currency_id",
        "delivery_place_id",
        "manufacturer_id",
        "measure_unit_id",
        "offer_mode_id",
        "offer_type_id",
        "packaging_type_id",
        "security_type_id",
        "settlement_type_id",
        "supplier_id",
        "trading_hall_id",
        "init_price",
        "offer_vol",
        "offer_date",
        "delivery_date",
        "offer_symbol",
        "trade_status",
    ],
    create = CreateOffer,
    patch = PatchOffer,
    response = OfferResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogEntity, FieldKind};

    #[test]
    fn test_offer_has_forty_columns() {
        assert_eq!(Offer::columns().len(), 40);
    }

    #[test]
    fn test_offer_date_filters_are_timestamps() {
        let registry = Offer::filters();
        assert_eq!(
            registry.resolve("offer_date").map(|spec| spec.kind),
            Some(FieldKind::Timestamp)
        );
        assert_eq!(
            registry.resolve("init_price").map(|spec| spec.kind),
            Some(FieldKind::Integer)
        );
        assert!(registry.resolve("security_type_note").is_none());
    }
}
