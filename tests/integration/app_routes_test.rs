//! Tests against the fully assembled application on the in-memory backend.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::TestApp;

const BASES: [&str; 22] = [
    "/broker",
    "/buy-method",
    "/commodity",
    "/contract-type",
    "/currency-unit",
    "/delivery-place",
    "/menu-group",
    "/group",
    "/sub-group",
    "/group-hall",
    "/hall-menu-group",
    "/hall-menu-sub-group",
    "/trading-hall",
    "/manufacturers",
    "/measure-unit",
    "/offer",
    "/offer-mod",
    "/offer-type",
    "/packaging-type",
    "/report",
    "/settlement",
    "/supplier",
];

#[tokio::test]
async fn test_health_reports_memory_backend() {
    let app = TestApp::full();

    let res = app.get("/health").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["status"], "ok");
    assert_eq!(res.body["database"], "memory");
}

#[tokio::test]
async fn test_every_catalog_base_lists() {
    let app = TestApp::full();

    for base in BASES {
        let res = app.get(&format!("{base}/api/v1")).await;
        assert_eq!(res.status, StatusCode::OK, "{base}");
        assert_eq!(res.body["pagination"]["total_records"], 0, "{base}");
        assert_eq!(res.body["data"], json!([]), "{base}");
    }
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = TestApp::full();

    let res = app.get("/contract-unit/api/v1").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_measure_unit_lifecycle() {
    let app = TestApp::full();

    let created = app
        .request(
            "POST",
            "/measure-unit/api/v1",
            Some(json!({ "description": "metric ton", "persianName": "تن" })),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    let id = created.body["id"].as_i64().expect("id");

    let listed = app
        .get(&format!("/measure-unit/api/v1/?id={id}"))
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.ids(), vec![id]);

    // description is not filterable on lookup tables
    let ignored = app.get("/measure-unit/api/v1?description=nothing").await;
    assert_eq!(ignored.body["pagination"]["total_records"], 1);

    let deleted = app
        .request("DELETE", &format!("/measure-unit/api/v1/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_broker_not_found_message() {
    let app = TestApp::full();

    let res = app.get("/broker/api/v1/1").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["message"], "broker not found");
}
