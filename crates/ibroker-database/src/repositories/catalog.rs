//! PostgreSQL catalog repository, generic over every catalog entity.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use ibroker_core::error::{AppError, ErrorKind};
use ibroker_core::result::AppResult;
use ibroker_core::traits::CatalogRepository;
use ibroker_core::types::{Page, PageRequest, ResolvedFilter};
use ibroker_entity::CatalogEntity;

use super::coerce_filters;
use super::sql::{count_query, insert_query, page_query, quote, update_query};

/// Repository for one catalog table.
#[derive(Debug, Clone)]
pub struct PgCatalogRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: CatalogEntity> PgCatalogRepository<E> {
    /// Create a new catalog repository.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: CatalogEntity> CatalogRepository<E> for PgCatalogRepository<E> {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE \"id\" = $1", quote(E::TABLE));
        sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, &format!("Failed to find {}", E::LABEL)))
    }

    async fn find_page(
        &self,
        filters: &[ResolvedFilter],
        page: &PageRequest,
    ) -> AppResult<Page<E>> {
        let filters = coerce_filters(filters)?;

        let mut count = count_query(E::TABLE, &filters);
        let mut select = page_query(E::TABLE, &filters, page);
        debug!(sql = select.sql(), table = E::TABLE, "Listing catalog rows");

        let total = count
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(e, &format!("Failed to count {} rows", E::LABEL)))?;

        let items = select
            .build_query_as::<E>()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error(e, &format!("Failed to list {} rows", E::LABEL)))?;

        Ok(Page::new(items, u64::try_from(total).unwrap_or_default()))
    }

    async fn create(&self, entity: &E) -> AppResult<E> {
        let mut insert = insert_query(E::TABLE, E::columns(), entity.values());
        insert
            .build_query_as::<E>()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error(e, &format!("Failed to create {}", E::LABEL)))
    }

    async fn update(&self, entity: &E) -> AppResult<Option<E>> {
        let mut update = update_query(E::TABLE, E::columns(), entity.values(), entity.id());
        update
            .build_query_as::<E>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error(e, &format!("Failed to update {}", E::LABEL)))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let sql = format!("DELETE FROM {} WHERE \"id\" = $1", quote(E::TABLE));
        let result = sqlx::query(&sql)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error(e, &format!("Failed to delete {}", E::LABEL)))?;
        Ok(result.rows_affected() > 0)
    }
}

/// Map a sqlx error, surfacing constraint violations as conflicts.
fn database_error(err: sqlx::Error, context: &str) -> AppError {
    let conflict = match &err {
        sqlx::Error::Database(db) if db.is_unique_violation() || db.is_foreign_key_violation() => {
            Some(format!("{context}: {}", db.message()))
        }
        _ => None,
    };
    match conflict {
        Some(message) => AppError::with_source(ErrorKind::Conflict, message, err),
        None => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_database_error() {
        let err = database_error(sqlx::Error::RowNotFound, "Failed to find broker");
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "Failed to find broker");
        assert!(err.source.is_some());
    }
}
