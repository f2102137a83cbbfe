//! HTTP tests for the generic catalog routes.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use helpers::{TestApp, listing};

/// Three cheap listings, then twelve priced above 100.
fn priced_listings() -> TestApp {
    let rows = (1..=15)
        .map(|id| listing(id, if id <= 3 { 50 } else { 100 + id }))
        .collect();
    TestApp::listings(rows)
}

#[tokio::test]
async fn test_filtered_second_page_with_links() {
    let app = priced_listings();

    let res = app
        .get("/listing/api/v1?price_gt=100&page=2&limit=5")
        .await;

    assert_eq!(res.status, StatusCode::OK);
    let pagination = &res.body["pagination"];
    assert_eq!(pagination["current_page"], 2);
    assert_eq!(pagination["total_records"], 12);
    assert_eq!(pagination["total_pages"], 3);
    assert_eq!(
        pagination["next_page"],
        "http://localhost:5500/listing/api/v1?price_gt=100&page=3&limit=5"
    );
    assert_eq!(
        pagination["prev_page"],
        "http://localhost:5500/listing/api/v1?price_gt=100&page=1&limit=5"
    );
    assert_eq!(res.ids(), vec![9, 10, 11, 12, 13]);
}

#[tokio::test]
async fn test_defaults_to_first_page_of_ten() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1").await;

    assert_eq!(res.status, StatusCode::OK);
    let pagination = &res.body["pagination"];
    assert_eq!(pagination["current_page"], 1);
    assert_eq!(pagination["total_records"], 15);
    assert_eq!(pagination["total_pages"], 2);
    assert_eq!(
        pagination["next_page"],
        "http://localhost:5500/listing/api/v1?page=2"
    );
    assert_eq!(pagination["prev_page"], "");
    assert_eq!(res.ids(), (1..=10).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_last_page_has_no_next_link() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1?page=2").await;

    assert_eq!(res.body["pagination"]["next_page"], "");
    assert_eq!(
        res.body["pagination"]["prev_page"],
        "http://localhost:5500/listing/api/v1?page=1"
    );
    assert_eq!(res.ids(), (11..=15).collect::<Vec<i64>>());
}

#[tokio::test]
async fn test_no_matches_returns_empty_envelope() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1?name=nobody").await;

    assert_eq!(res.status, StatusCode::OK);
    let pagination = &res.body["pagination"];
    assert_eq!(pagination["total_records"], 0);
    assert_eq!(pagination["total_pages"], 0);
    assert_eq!(pagination["next_page"], "");
    assert_eq!(pagination["prev_page"], "");
    assert_eq!(res.body["data"], json!([]));
}

#[tokio::test]
async fn test_filter_outside_allow_list_is_ignored() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1?active=false&limit=20").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["pagination"]["total_records"], 15);
}

#[tokio::test]
async fn test_combined_filters_and_empty_values() {
    let app = priced_listings();

    let res = app
        .get("/listing/api/v1?price_gte=110&price_lt=113&name=")
        .await;

    assert_eq!(res.ids(), vec![10, 11, 12]);
}

#[tokio::test]
async fn test_exact_match_on_text() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1?name=item-7").await;

    assert_eq!(res.ids(), vec![7]);
}

#[tokio::test]
async fn test_text_filter_keeps_surrounding_whitespace() {
    let mut padded = listing(1, 10);
    padded.name = " padded".to_string();
    let mut plain = listing(2, 10);
    plain.name = "padded".to_string();
    let app = TestApp::listings(vec![padded, plain]);

    let res = app.get("/listing/api/v1?name=%20padded").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.ids(), vec![1]);
}

#[tokio::test]
async fn test_malformed_filter_value_is_bad_request() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1?price_gt=abc").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 400);
    assert_eq!(res.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_trailing_slash_reaches_list() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1/?limit=1").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.ids(), vec![1]);
}

#[tokio::test]
async fn test_get_by_id() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1/4").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": 4, "price": 104, "name": "item-4", "active": true })
    );
}

#[tokio::test]
async fn test_unknown_id_is_not_found() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1/999").await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["code"], 404);
    assert_eq!(res.body["message"], "listing not found");
}

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = priced_listings();

    let res = app.get("/listing/api/v1/abc").await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_create_then_fetch() {
    let app = priced_listings();

    let res = app
        .request(
            "POST",
            "/listing/api/v1",
            Some(json!({ "price": 42, "name": "fresh", "active": false })),
        )
        .await;

    assert_eq!(res.status, StatusCode::CREATED);
    assert_eq!(res.body["id"], 16);

    let fetched = app.get("/listing/api/v1/16").await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["name"], "fresh");
    assert_eq!(fetched.body["active"], false);
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let app = priced_listings();

    let res = app
        .request("POST", "/listing/api/v1", Some(json!({ "price": 42 })))
        .await;

    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["code"], 400);
    assert_eq!(res.body["error"], "VALIDATION");
}

#[tokio::test]
async fn test_patch_merges_present_fields() {
    let app = priced_listings();

    let res = app
        .request("PATCH", "/listing/api/v1/5", Some(json!({ "price": 7 })))
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": 5, "price": 7, "name": "item-5", "active": true })
    );
}

#[tokio::test]
async fn test_put_replaces_whole_row() {
    let app = priced_listings();

    let res = app
        .request(
            "PUT",
            "/listing/api/v1/5",
            Some(json!({ "price": 1, "name": "renamed", "active": false })),
        )
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.body,
        json!({ "id": 5, "price": 1, "name": "renamed", "active": false })
    );
}

#[tokio::test]
async fn test_update_of_unknown_id_is_not_found() {
    let app = priced_listings();

    let res = app
        .request("PATCH", "/listing/api/v1/404", Some(json!({ "price": 7 })))
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_removes_row() {
    let app = priced_listings();

    let res = app.request("DELETE", "/listing/api/v1/3", None).await;
    assert_eq!(res.status, StatusCode::NO_CONTENT);

    let again = app.request("DELETE", "/listing/api/v1/3", None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);

    let list = app.get("/listing/api/v1?limit=100").await;
    assert_eq!(list.body["pagination"]["total_records"], 14);
}
