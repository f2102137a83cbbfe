//! Route definitions for the iBroker HTTP API.
//!
//! Each catalog entity is mounted at `<base>/api/v1` with its own
//! [`CatalogState`]; the per-entity routers are merged into one `Router`
//! alongside `/health`.

use std::time::Duration;

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use ibroker_entity::CatalogEntity;
use ibroker_entity::commodity::{Commodity, Group, MainGroup, SubGroup};
use ibroker_entity::hall::{GroupHall, HallMenuGroup, HallMenuSubGroup, TradingHall};
use ibroker_entity::lookup::{
    BuyMethod, ContractType, CurrencyUnit, DeliveryPlace, MeasureUnit, OfferMod, OfferType,
    PackagingType, Settlement,
};
use ibroker_entity::offer::Offer;
use ibroker_entity::party::{Broker, Manufacturer, Supplier};
use ibroker_entity::report::Report;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::{AppState, CatalogState};

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_seconds);
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .route("/health", get(handlers::health::health))
        .with_state(state.clone())
        .merge(catalog_routes(&state))
        .layer(TimeoutLayer::new(timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
}

/// All catalog entities under their route bases.
fn catalog_routes(state: &AppState) -> Router {
    Router::new()
        .merge(catalog_router::<Broker>("/broker", state.catalog()))
        .merge(catalog_router::<BuyMethod>("/buy-method", state.catalog()))
        .merge(catalog_router::<Commodity>("/commodity", state.catalog()))
        .merge(catalog_router::<ContractType>("/contract-type", state.catalog()))
        .merge(catalog_router::<CurrencyUnit>("/currency-unit", state.catalog()))
        .merge(catalog_router::<DeliveryPlace>("/delivery-place", state.catalog()))
        .merge(catalog_router::<MainGroup>("/menu-group", state.catalog()))
        .merge(catalog_router::<Group>("/group", state.catalog()))
        .merge(catalog_router::<SubGroup>("/sub-group", state.catalog()))
        .merge(catalog_router::<GroupHall>("/group-hall", state.catalog()))
        .merge(catalog_router::<HallMenuGroup>("/hall-menu-group", state.catalog()))
        .merge(catalog_router::<HallMenuSubGroup>("/hall-menu-sub-group", state.catalog()))
        .merge(catalog_router::<TradingHall>("/trading-hall", state.catalog()))
        .merge(catalog_router::<Manufacturer>("/manufacturers", state.catalog()))
        .merge(catalog_router::<MeasureUnit>("/measure-unit", state.catalog()))
        .merge(catalog_router::<Offer>("/offer", state.catalog()))
        .merge(catalog_router::<OfferMod>("/offer-mod", state.catalog()))
        .merge(catalog_router::<OfferType>("/offer-type", state.catalog()))
        .merge(catalog_router::<PackagingType>("/packaging-type", state.catalog()))
        .merge(catalog_router::<Report>("/report", state.catalog()))
        .merge(catalog_router::<Settlement>("/settlement", state.catalog()))
        .merge(catalog_router::<Supplier>("/supplier", state.catalog()))
}

/// CRUD routes for one entity at `<base>/api/v1` and `<base>/api/v1/{id}`.
pub fn catalog_router<E: CatalogEntity>(base: &str, state: CatalogState<E>) -> Router {
    use handlers::catalog;

    Router::new()
        .route(
            &format!("{base}/api/v1"),
            get(catalog::list::<E>).post(catalog::create::<E>),
        )
        .route(
            &format!("{base}/api/v1/{{id}}"),
            get(catalog::get::<E>)
                .put(catalog::replace::<E>)
                .patch(catalog::patch::<E>)
                .delete(catalog::delete::<E>),
        )
        .with_state(state)
}
