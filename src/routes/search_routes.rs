//! Rutas de búsqueda por entidad
//!
//! Cada entidad expone `GET /search` (filtro + paginación en la query
//! string) y `GET /:id`.

use axum::{
    extract::{rejection::PathRejection, rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;

use crate::dto::{PageRequest, PageResponse};
use crate::filters::EntityFilter;
use crate::models::Entity;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_search_router<F>() -> Router<AppState>
where
    F: EntityFilter + DeserializeOwned + Send + Sync + 'static,
{
    Router::new()
        .route("/search", get(search::<F>))
        .route("/:id", get(get_by_id::<F::Row>))
}

async fn search<F>(
    State(state): State<AppState>,
    filter: Result<Query<F>, QueryRejection>,
    page: Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<PageResponse<F::Row>>, AppError>
where
    F: EntityFilter + DeserializeOwned + Send + Sync + 'static,
{
    let Query(filter) = filter.map_err(|e| bad_request_error(&e.body_text()))?;
    let Query(page) = page.map_err(|e| bad_request_error(&e.body_text()))?;

    let response = state.search_service().search(&filter, &page).await?;
    Ok(Json(response))
}

async fn get_by_id<E: Entity>(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<E>, AppError> {
    let Path(id) = id.map_err(|e| bad_request_error(&e.body_text()))?;
    let row = state.search_service().find_by_id::<E>(id).await?;
    Ok(Json(row))
}
