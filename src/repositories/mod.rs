//! Repositorios de búsqueda
//!
//! `SearchStore` ejecuta un predicado sobre una entidad. Hay dos
//! implementaciones: PostgreSQL y un almacén en memoria.

pub mod memory_repository;
pub mod search_repository;

use async_trait::async_trait;

use crate::dto::Pagination;
use crate::models::Entity;
use crate::predicate::Predicate;
use crate::utils::errors::AppResult;

pub use memory_repository::InMemoryFleet;
pub use search_repository::PgSearchRepository;

#[async_trait]
pub trait SearchStore: Send + Sync {
    /// Filas de `E` que cumplen el predicado, paginadas
    async fn search<E: Entity>(&self, predicate: &Predicate, pagination: &Pagination) -> AppResult<Vec<E>>;

    /// Total de filas de `E` que cumplen el predicado
    async fn count<E: Entity>(&self, predicate: &Predicate) -> AppResult<i64>;

    async fn find_by_id<E: Entity>(&self, id: i64) -> AppResult<Option<E>>;
}
