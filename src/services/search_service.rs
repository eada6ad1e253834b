//! Servicio de búsqueda
//!
//! Valida el filtro y la paginación antes de tocar el almacén, y devuelve
//! una página de resultados.

use crate::dto::{PageRequest, PageResponse};
use crate::filters::{build_predicate, EntityFilter};
use crate::models::Entity;
use crate::repositories::SearchStore;
use crate::utils::errors::{not_found_error, AppResult};

pub struct SearchService<S> {
    store: S,
}

impl<S: SearchStore> SearchService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Buscar filas de la entidad de `F`
    pub async fn search<F: EntityFilter>(
        &self,
        filter: &F,
        page: &PageRequest,
    ) -> AppResult<PageResponse<F::Row>> {
        let predicate = build_predicate(F::ROOT, filter)?;
        let pagination = page.resolve(F::ROOT)?;
        tracing::debug!(
            entity = %F::ROOT,
            conditions = predicate.condition_count(),
            predicate = %serde_json::to_string(&predicate).unwrap_or_default(),
            page = pagination.page,
            size = pagination.size,
            "🔎 Búsqueda"
        );

        let total = self.store.count::<F::Row>(&predicate).await?;
        let content = self.store.search::<F::Row>(&predicate, &pagination).await?;
        tracing::info!(
            "✅ {} de {} resultados de {} (página {})",
            content.len(),
            total,
            F::ROOT,
            pagination.page
        );

        Ok(PageResponse::new(content, &pagination, total))
    }

    pub async fn find_by_id<E: Entity>(&self, id: i64) -> AppResult<E> {
        self.store
            .find_by_id::<E>(id)
            .await?
            .ok_or_else(|| not_found_error(E::KIND.table(), &id.to_string()))
    }
}
