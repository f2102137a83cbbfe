//! In-process catalog repository for development and tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use ibroker_core::error::AppError;
use ibroker_core::result::AppResult;
use ibroker_core::traits::CatalogRepository;
use ibroker_core::types::{Page, PageRequest, ResolvedFilter};
use ibroker_entity::CatalogEntity;

use super::{TypedFilter, coerce_filters};

/// Catalog rows kept in memory, keyed and ordered by id.
///
/// Filtering, ordering and paging follow the PostgreSQL repository.
#[derive(Debug)]
pub struct MemoryCatalogRepository<E> {
    rows: RwLock<BTreeMap<i64, E>>,
    next_id: AtomicI64,
}

impl<E: CatalogEntity> MemoryCatalogRepository<E> {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Create a repository holding the given rows under their own ids.
    pub fn with_rows(rows: impl IntoIterator<Item = E>) -> Self {
        let rows: BTreeMap<i64, E> = rows.into_iter().map(|row| (row.id(), row)).collect();
        let next_id = rows.keys().next_back().map_or(1, |max| max + 1);
        Self {
            rows: RwLock::new(rows),
            next_id: AtomicI64::new(next_id),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, BTreeMap<i64, E>>> {
        self.rows
            .read()
            .map_err(|e| AppError::internal(format!("Failed to acquire read lock: {e}")))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, BTreeMap<i64, E>>> {
        self.rows
            .write()
            .map_err(|e| AppError::internal(format!("Failed to acquire write lock: {e}")))
    }
}

impl<E: CatalogEntity> Default for MemoryCatalogRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

fn matches<E: CatalogEntity>(row: &E, filters: &[TypedFilter]) -> bool {
    filters.iter().all(|filter| {
        row.value_of(filter.column)
            .and_then(|value| value.compare(&filter.value))
            .is_some_and(|ordering| filter.op.accepts(ordering))
    })
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for MemoryCatalogRepository<E> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn find_page(
        &self,
        filters: &[ResolvedFilter],
        page: &PageRequest,
    ) -> AppResult<Page<E>> {
        let filters = coerce_filters(filters)?;
        let rows = self.read()?;

        let matching: Vec<&E> = rows.values().filter(|row| matches(*row, &filters)).collect();
        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items = matching.into_iter().skip(offset).take(limit).cloned().collect();

        Ok(Page::new(items, total))
    }

    async fn create(&self, entity: &E) -> AppResult<E> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let mut row = entity.clone();
        row.set_id(id);
        self.write()?.insert(id, row.clone());
        Ok(row)
    }

    async fn update(&self, entity: &E) -> AppResult<Option<E>> {
        let mut rows = self.write()?;
        match rows.get_mut(&entity.id()) {
            Some(existing) => {
                *existing = entity.clone();
                Ok(Some(entity.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.write()?.remove(&id).is_some())
    }
}
