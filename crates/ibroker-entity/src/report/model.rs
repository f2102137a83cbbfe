//! Trade report model.

use chrono::{DateTime, Utc};

use crate::catalog_entity;

catalog_entity! {
    /// Outcome of a trading session for one offer.
    pub struct Report {
        pub commodity_id: i64,
        pub contract_type_id: i64,
        pub currency_id: i64,
        pub manufacturer_id: i64,
        pub measurement_unit_id: i64,
        /// The offer this report closes.
        pub offer_id: i64,
        pub seller_broker_id: i64,
        pub supplier_id: i64,
        /// Total demanded volume.
        pub demand_volume: String,
        pub maximum_price: i64,
        pub minimum_price: i64,
        pub offer_base_price: i64,
        pub offer_volume: String,
        /// Volume-weighted average of the executed prices.
        pub final_weighted_average_price: i64,
        pub buy_method: String,
        /// Settlement due date.
        pub due_date: DateTime<Utc>,
        pub offer_mode: String,
        pub offer_symbol: String,
        pub offer_type: String,
        /// Trading session date.
        pub trade_date: DateTime<Utc>,
        pub trade_value: String,
        pub trade_volume: String,
    }
    table = "reports",
    label = "report",
    filterable = [
        "commodity_id",
        "contract_type_id",
        "currency_id",
        "manufacturer_id",
        "measurement_unit_id",
        "offer_id",
        "seller_broker_id",
        "supplier_id",
        "maximum_price",
        "minimum_price",
        "offer_base_price",
        "final_weighted_average_price",
        "trade_date",
        "due_date",
        "offer_symbol",
    ],
    create = CreateReport,
    patch = PatchReport,
    response = ReportResponse,
}
