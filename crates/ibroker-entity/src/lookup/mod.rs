//! Flat lookup tables.

pub mod model;

pub use model::{
    BuyMethod, BuyMethodResponse, ContractType, ContractTypeResponse, CreateBuyMethod,
    CreateContractType, CreateCurrencyUnit, CreateDeliveryPlace, CreateMeasureUnit,
    CreateOfferMod, CreateOfferType, CreatePackagingType, CreateSettlement, CurrencyUnit,
    CurrencyUnitResponse, DeliveryPlace, DeliveryPlaceResponse, MeasureUnit,
    MeasureUnitResponse, OfferMod, OfferModResponse, OfferType, OfferTypeResponse,
    PackagingType, PackagingTypeResponse, PatchBuyMethod, PatchContractType, PatchCurrencyUnit,
    PatchDeliveryPlace, PatchMeasureUnit, PatchOfferMod, PatchOfferType, PatchPackagingType,
    PatchSettlement, Settlement, SettlementResponse,
};
