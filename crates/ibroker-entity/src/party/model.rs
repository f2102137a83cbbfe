//! Broker, supplier and manufacturer models.

use crate::catalog_entity;

catalog_entity! {
    /// A brokerage firm licensed on the exchange.
    pub struct Broker {
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
        /// Identifier on the spot market.
        pub spot_id: i64,
        /// Identifier on the derivatives market.
        pub derivatives_id: i64,
        /// National registration number.
        pub national_id: String,
    }
    table = "brokers",
    label = "broker",
    filterable = ["persian_name", "spot_id", "derivatives_id", "national_id"],
    create = CreateBroker,
    patch = PatchBroker,
    response = BrokerResponse,
}

catalog_entity! {
    /// A seller offering commodities.
    pub struct Supplier {
        /// Customer number at the exchange.
        pub customer_id: i64,
        /// Free-text description.
        pub description: String,
        /// Display name.
        pub persian_name: String,
        /// National registration code.
        pub national_code: String,
    }
    table = "suppliers",
    label = "supplier",
    filterable = ["customer_id", "persian_name", "national_code"],
    create = CreateSupplier,
    patch = PatchSupplier,
    response = SupplierResponse,
}

catalog_entity! {
    /// A producer of traded commodities.
    pub struct Manufacturer {
        pub description: String,
        pub persian_name: String,
        pub national_id: String,
    }
    table = "manufacturers",
    label = "manufacturer",
    filterable = ["persian_name", "national_id"],
    create = CreateManufacturer,
    patch = PatchManufacturer,
    response = ManufacturerResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatalogEntity, FieldKind, FieldValue};

    fn broker() -> Broker {
        Broker::from_create(
            7,
            CreateBroker {
                description: "Tehran brokerage".to_string(),
                persian_name: "Mofid".to_string(),
                spot_id: 120,
                derivatives_id: 340,
                national_id: "10101".to_string(),
            },
        )
    }

    #[test]
    fn test_broker_columns() {
        let names: Vec<_> = Broker::columns().iter().map(|spec| spec.name).collect();
        assert_eq!(
            names,
            ["description", "persian_name", "spot_id", "derivatives_id", "national_id"]
        );
        assert_eq!(Broker::columns()[2].kind, FieldKind::Integer);
        assert_eq!(Broker::TABLE, "brokers");
    }

    #[test]
    fn test_value_of_reads_columns_and_id() {
        let broker = broker();
        assert_eq!(broker.value_of("id"), Some(FieldValue::Integer(7)));
        assert_eq!(broker.value_of("spot_id"), Some(FieldValue::Integer(120)));
        assert_eq!(
            broker.value_of("persian_name"),
            Some(FieldValue::Text("Mofid".to_string()))
        );
        assert_eq!(broker.value_of("missing"), None);
    }

    #[test]
    fn test_patch_changes_only_present_fields() {
        let mut broker = broker();
        let patch: PatchBroker = serde_json::from_str(r#"{"spotId": 999}"#).unwrap();

        broker.apply_patch(patch);

        assert_eq!(broker.spot_id, 999);
        assert_eq!(broker.persian_name, "Mofid");
        assert_eq!(broker.id, 7);
    }

    #[test]
    fn test_replace_keeps_id() {
        let mut supplier = Supplier::from_create(
            3,
            CreateSupplier {
                customer_id: 1,
                description: String::new(),
                persian_name: "Old".to_string(),
                national_code: "1".to_string(),
            },
        );

        supplier.replace(CreateSupplier {
            customer_id: 2,
            description: "new".to_string(),
            persian_name: "New".to_string(),
            national_code: "2".to_string(),
        });

        assert_eq!(supplier.id, 3);
        assert_eq!(supplier.customer_id, 2);
        assert_eq!(supplier.persian_name, "New");
    }

    #[test]
    fn test_response_uses_camel_case() {
        let response = BrokerResponse::from(broker());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["persianName"], "Mofid");
        assert_eq!(json["derivativesId"], 340);
    }

    #[test]
    fn test_create_requires_every_field() {
        let result = serde_json::from_str::<CreateManufacturer>(r#"{"persianName": "Esfahan Steel"}"#);
        assert!(result.is_err());
    }
}
