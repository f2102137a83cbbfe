//! Generic CRUD handlers shared by every catalog entity.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use ibroker_core::types::{PageEnvelope, PaginationState};
use ibroker_entity::CatalogEntity;

use crate::error::ApiError;
use crate::extractors::{CatalogId, CatalogJson, ListQuery};
use crate::state::CatalogState;

/// GET `<base>/api/v1`
pub async fn list<E: CatalogEntity>(
    State(state): State<CatalogState<E>>,
    query: ListQuery,
) -> Result<Json<PageEnvelope<E::Response>>, ApiError> {
    let page = state.service.list(&query.predicates, &query.page).await?;

    let pagination = PaginationState::compute(&query.page, page.total)
        .with_links(&query.current_url(&state.public_scheme));
    let page = page.map(E::Response::from);

    Ok(Json(PageEnvelope::new(&pagination, page.items)))
}

/// POST `<base>/api/v1`
pub async fn create<E: CatalogEntity>(
    State(state): State<CatalogState<E>>,
    CatalogJson(input): CatalogJson<E::Create>,
) -> Result<(StatusCode, Json<E::Response>), ApiError> {
    let row = state.service.create(input).await?;
    Ok((StatusCode::CREATED, Json(row.into())))
}

/// GET `<base>/api/v1/{id}`
pub async fn get<E: CatalogEntity>(
    State(state): State<CatalogState<E>>,
    CatalogId(id): CatalogId,
) -> Result<Json<E::Response>, ApiError> {
    let row = state.service.get(id).await?;
    Ok(Json(row.into()))
}

/// PUT `<base>/api/v1/{id}`
pub async fn replace<E: CatalogEntity>(
    State(state): State<CatalogState<E>>,
    CatalogId(id): CatalogId,
    CatalogJson(input): CatalogJson<E::Create>,
) -> Result<Json<E::Response>, ApiError> {
    let row = state.service.replace(id, input).await?;
    Ok(Json(row.into()))
}

/// PATCH `<base>/api/v1/{id}`
pub async fn patch<E: CatalogEntity>(
    State(state): State<CatalogState<E>>,
    CatalogId(id): CatalogId,
    CatalogJson(patch): CatalogJson<E::Patch>,
) -> Result<Json<E::Response>, ApiError> {
    let row = state.service.patch(id, patch).await?;
    Ok(Json(row.into()))
}

/// DELETE `<base>/api/v1/{id}`
pub async fn delete<E: CatalogEntity>(
    State(state): State<CatalogState<E>>,
    CatalogId(id): CatalogId,
) -> Result<StatusCode, ApiError> {
    state.service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
