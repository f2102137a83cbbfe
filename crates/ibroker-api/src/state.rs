//! Application state shared across handlers.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use ibroker_core::config::AppConfig;
use ibroker_core::result::AppResult;
use ibroker_database::{DatabasePool, MemoryCatalogRepository, PgCatalogRepository};
use ibroker_entity::CatalogEntity;
use ibroker_service::CatalogService;

/// Where catalog rows live.
#[derive(Debug, Clone)]
pub enum Backend {
    /// PostgreSQL.
    Postgres(DatabasePool),
    /// Process-local store.
    Memory,
}

impl Backend {
    /// Build a catalog service for `E` on this backend.
    pub fn service<E: CatalogEntity>(&self) -> Arc<CatalogService<E>> {
        let service = match self {
            Self::Postgres(pool) => {
                CatalogService::new(Arc::new(PgCatalogRepository::<E>::new(pool.pool().clone())))
            }
            Self::Memory => CatalogService::new(Arc::new(MemoryCatalogRepository::<E>::new())),
        };
        Arc::new(service)
    }

    /// Probe the backend. Returns a short description of what answered.
    pub async fn ping(&self) -> AppResult<&'static str> {
        match self {
            Self::Postgres(pool) => pool.ping().await.map(|()| "connected"),
            Self::Memory => Ok("memory"),
        }
    }
}

/// State for the health route and for building the catalog routes.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Persistence backend.
    pub backend: Backend,
    /// When the server started.
    pub started_at: Instant,
}

impl AppState {
    /// Creates the application state.
    pub fn new(config: AppConfig, backend: Backend) -> Self {
        Self {
            config: Arc::new(config),
            backend,
            started_at: Instant::now(),
        }
    }

    /// Per-entity state for the catalog routes of `E`.
    pub fn catalog<E: CatalogEntity>(&self) -> CatalogState<E> {
        CatalogState::new(
            self.backend.service::<E>(),
            &self.config.server.public_scheme,
        )
    }
}

/// State handed to the generic catalog handlers of one entity.
pub struct CatalogState<E: CatalogEntity> {
    /// Service for the entity.
    pub service: Arc<CatalogService<E>>,
    /// Scheme used in pagination links.
    pub public_scheme: Arc<str>,
}

impl<E: CatalogEntity> CatalogState<E> {
    /// Creates catalog state.
    pub fn new(service: Arc<CatalogService<E>>, public_scheme: &str) -> Self {
        Self {
            service,
            public_scheme: Arc::from(public_scheme),
        }
    }
}

impl<E: CatalogEntity> Clone for CatalogState<E> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            public_scheme: Arc::clone(&self.public_scheme),
        }
    }
}

impl<E: CatalogEntity> fmt::Debug for CatalogState<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogState")
            .field("table", &E::TABLE)
            .field("public_scheme", &self.public_scheme)
            .finish()
    }
}
