//! Market participants: brokers, suppliers and manufacturers.

pub mod model;

pub use model::{
    Broker, BrokerResponse, CreateBroker, CreateManufacturer, CreateSupplier, Manufacturer,
    ManufacturerResponse, PatchBroker, PatchManufacturer, PatchSupplier, Supplier,
    SupplierResponse,
};
