//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::environment::EnvironmentConfig;
use crate::repositories::PgSearchRepository;
use crate::services::SearchService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self { pool, config }
    }

    /// Servicio de búsqueda sobre PostgreSQL
    pub fn search_service(&self) -> SearchService<PgSearchRepository> {
        SearchService::new(PgSearchRepository::new(self.pool.clone()))
    }
}
