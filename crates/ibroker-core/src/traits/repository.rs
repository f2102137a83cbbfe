//! Generic repository trait for catalog tables.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::filter::ResolvedFilter;
use crate::types::pagination::{Page, PageRequest};

/// CRUD access to one catalog table.
///
/// Filters handed to [`find_page`](Self::find_page) have already passed
/// the entity's allow-list; implementations only coerce and apply them.
#[async_trait]
pub trait CatalogRepository<Entity>: Send + Sync + 'static
where
    Entity: Send + Sync + 'static,
{
    /// Find a row by its primary key.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Entity>>;

    /// Return one page of rows matching every filter, ordered by id, plus the match count.
    async fn find_page(&self, filters: &[ResolvedFilter], page: &PageRequest)
    -> AppResult<Page<Entity>>;

    /// Insert a row and return it with its assigned id.
    async fn create(&self, entity: &Entity) -> AppResult<Entity>;

    /// Overwrite the row with the entity's id. Returns `None` if it does not exist.
    async fn update(&self, entity: &Entity) -> AppResult<Option<Entity>>;

    /// Delete a row by its primary key. Returns `true` if deleted.
    async fn delete(&self, id: i64) -> AppResult<bool>;
}
