//! Flat lookup tables.
//!
//! Each lookup is an id with a description and a display name.

use crate::catalog_entity;

catalog_entity! {
    /// How a buy order is matched (auction, negotiated, ...).
    pub struct BuyMethod {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "buy_methods",
    label = "buy method",
    filterable = ["id", "persian_name"],
    create = CreateBuyMethod,
    patch = PatchBuyMethod,
    response = BuyMethodResponse,
}

catalog_entity! {
    /// Kind of delivery contract (cash, credit, forward, ...).
    pub struct ContractType {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "contract_types",
    label = "contract type",
    filterable = ["id", "persian_name"],
    create = CreateContractType,
    patch = PatchContractType,
    response = ContractTypeResponse,
}

catalog_entity! {
    /// Currency in which an offer is priced.
    pub struct CurrencyUnit {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "currency_units",
    label = "currency unit",
    filterable = ["id", "persian_name"],
    create = CreateCurrencyUnit,
    patch = PatchCurrencyUnit,
    response = CurrencyUnitResponse,
}

catalog_entity! {
    /// Warehouse or port where goods are delivered.
    pub struct DeliveryPlace {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "delivery_places",
    label = "delivery place",
    filterable = ["id", "persian_name"],
    create = CreateDeliveryPlace,
    patch = PatchDeliveryPlace,
    response = DeliveryPlaceResponse,
}

catalog_entity! {
    /// Unit of quantity (ton, kilogram, barrel, ...).
    pub struct MeasureUnit {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "measure_units",
    label = "measure unit",
    filterable = ["id", "persian_name"],
    create = CreateMeasureUnit,
    patch = PatchMeasureUnit,
    response = MeasureUnitResponse,
}

catalog_entity! {
    /// Offer mode (normal, competitive, ...).
    pub struct OfferMod {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "offer_mods",
    label = "offer mod",
    filterable = ["id", "persian_name"],
    create = CreateOfferMod,
    patch = PatchOfferMod,
    response = OfferModResponse,
}

catalog_entity! {
    /// Offer type (sell, buy).
    pub struct OfferType {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "offer_types",
    label = "offer type",
    filterable = ["id", "persian_name"],
    create = CreateOfferType,
    patch = PatchOfferType,
    response = OfferTypeResponse,
}

catalog_entity! {
    /// How goods are packed (bulk, bag, drum, ...).
    pub struct PackagingType {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "packaging_types",
    label = "packaging type",
    filterable = ["id", "persian_name"],
    create = CreatePackagingType,
    patch = PatchPackagingType,
    response = PackagingTypeResponse,
}

catalog_entity! {
    /// Settlement method of a trade.
    pub struct Settlement {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
    }
    table = "settlements",
    label = "settlement",
    filterable = ["id", "persian_name"],
    create = CreateSettlement,
    patch = PatchSettlement,
    response = SettlementResponse,
}
