//! Shared test helpers for HTTP tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::{Layer, ServiceExt};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use ibroker_api::{AppState, Backend, CatalogState, build_app, catalog_router};
use ibroker_core::config::{AppConfig, DatabaseBackend};
use ibroker_database::MemoryCatalogRepository;
use ibroker_entity::catalog_entity;
use ibroker_service::CatalogService;

pub const HOST: &str = "localhost:5500";

catalog_entity! {
    /// Minimal entity used to drive the generic catalog routes.
    pub struct Listing {
        pub price: i64,
        pub name: String,
        pub active: bool,
    }
    table = "listings",
    label = "listing",
    filterable = ["id", "price", "name"],
    create = CreateListing,
    patch = PatchListing,
    response = ListingResponse,
}

/// Listing with the given id, named `item-<id>`.
pub fn listing(id: i64, price: i64) -> Listing {
    Listing {
        id,
        price,
        name: format!("item-{id}"),
        active: true,
    }
}

/// Test application context
pub struct TestApp {
    /// The normalised router for making test requests
    pub app: NormalizePath<Router>,
}

impl TestApp {
    /// Serve `Listing` at `/listing/api/v1` over the given rows.
    pub fn listings(rows: Vec<Listing>) -> Self {
        let repo = MemoryCatalogRepository::<Listing>::with_rows(rows);
        let service = Arc::new(CatalogService::new(Arc::new(repo)));
        let router = catalog_router::<Listing>("/listing", CatalogState::new(service, "http"));

        Self {
            app: NormalizePathLayer::trim_trailing_slash().layer(router),
        }
    }

    /// The full application on the in-memory backend.
    pub fn full() -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;

        Self {
            app: build_app(AppState::new(config, Backend::Memory)),
        }
    }

    /// Send a request and decode the JSON response body.
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Host", HOST);

        let body = match body {
            Some(b) => {
                req = req.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .app
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}

impl TestResponse {
    /// Ids in the `data` array of a list envelope.
    pub fn ids(&self) -> Vec<i64> {
        self.body["data"]
            .as_array()
            .map(|rows| rows.iter().filter_map(|row| row["id"].as_i64()).collect())
            .unwrap_or_default()
    }
}
