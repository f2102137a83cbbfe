//! Catalog CRUD service.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use ibroker_core::error::AppError;
use ibroker_core::traits::CatalogRepository;
use ibroker_core::types::{FilterPredicate, Page, PageRequest};
use ibroker_entity::CatalogEntity;

/// CRUD operations on one catalog entity.
pub struct CatalogService<E: CatalogEntity> {
    /// Backing repository.
    repo: Arc<dyn CatalogRepository<E>>,
}

impl<E: CatalogEntity> fmt::Debug for CatalogService<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogService")
            .field("table", &E::TABLE)
            .finish()
    }
}

impl<E: CatalogEntity> Clone for CatalogService<E> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<E: CatalogEntity> CatalogService<E> {
    /// Creates a new catalog service.
    pub fn new(repo: Arc<dyn CatalogRepository<E>>) -> Self {
        Self { repo }
    }

    /// Lists one page of rows matching the filterable predicates.
    ///
    /// Predicates on fields outside the entity's allow-list are ignored.
    pub async fn list(
        &self,
        predicates: &[FilterPredicate],
        page: &PageRequest,
    ) -> Result<Page<E>, AppError> {
        let filters = E::filters().apply(predicates);
        debug!(
            table = E::TABLE,
            requested = predicates.len(),
            applied = filters.len(),
            page = page.page,
            limit = page.limit,
            "Listing catalog"
        );
        self.repo.find_page(&filters, page).await
    }

    /// Gets a row by id.
    pub async fn get(&self, id: i64) -> Result<E, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(not_found::<E>)
    }

    /// Creates a row from a create request.
    pub async fn create(&self, input: E::Create) -> Result<E, AppError> {
        let row = self.repo.create(&E::from_create(0, input)).await?;
        info!(table = E::TABLE, id = row.id(), "Catalog row created");
        Ok(row)
    }

    /// Replaces every writable column of an existing row.
    pub async fn replace(&self, id: i64, input: E::Create) -> Result<E, AppError> {
        let mut row = self.get(id).await?;
        row.replace(input);
        let row = self.repo.update(&row).await?.ok_or_else(not_found::<E>)?;
        info!(table = E::TABLE, id, "Catalog row replaced");
        Ok(row)
    }

    /// Applies a partial update to an existing row.
    pub async fn patch(&self, id: i64, patch: E::Patch) -> Result<E, AppError> {
        let mut row = self.get(id).await?;
        row.apply_patch(patch);
        let row = self.repo.update(&row).await?.ok_or_else(not_found::<E>)?;
        info!(table = E::TABLE, id, "Catalog row patched");
        Ok(row)
    }

    /// Deletes a row by id.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(not_found::<E>());
        }
        info!(table = E::TABLE, id, "Catalog row deleted");
        Ok(())
    }
}

fn not_found<E: CatalogEntity>() -> AppError {
    AppError::not_found(format!("{} not found", E::LABEL))
}
