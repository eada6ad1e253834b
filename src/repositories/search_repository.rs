use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::SearchStore;
use crate::dto::Pagination;
use crate::models::Entity;
use crate::predicate::{sql::ROOT_ALIAS, Predicate};
use crate::schema::{EntityKind, ID_COLUMN};
use crate::utils::errors::AppResult;

/// Búsquedas sobre PostgreSQL
pub struct PgSearchRepository {
    pool: PgPool,
}

impl PgSearchRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// `SELECT` paginado de `entity` filtrado por `predicate`
pub fn select_query(
    entity: EntityKind,
    predicate: &Predicate,
    pagination: &Pagination,
) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {ROOT_ALIAS}.* FROM {} {ROOT_ALIAS} WHERE ",
        entity.table()
    ));
    predicate.push_sql(&mut builder, entity);

    if let Some(sort) = pagination.sort {
        builder.push(format!(
            " ORDER BY {ROOT_ALIAS}.{} {}",
            sort.column.name(),
            sort.order.as_sql()
        ));
    }

    builder.push(" LIMIT ");
    builder.push_bind(pagination.limit());
    builder.push(" OFFSET ");
    builder.push_bind(pagination.offset());
    builder
}

/// `SELECT COUNT(*)` de `entity` filtrado por `predicate`
pub fn count_query(entity: EntityKind, predicate: &Predicate) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT COUNT(*) FROM {} {ROOT_ALIAS} WHERE ",
        entity.table()
    ));
    predicate.push_sql(&mut builder, entity);
    builder
}

#[async_trait]
impl SearchStore for PgSearchRepository {
    async fn search<E: Entity>(&self, predicate: &Predicate, pagination: &Pagination) -> AppResult<Vec<E>> {
        let mut builder = select_query(E::KIND, predicate, pagination);
        tracing::debug!(sql = builder.sql(), "🔎 Ejecutando búsqueda");

        let rows = builder.build_query_as::<E>().fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn count<E: Entity>(&self, predicate: &Predicate) -> AppResult<i64> {
        let mut builder = count_query(E::KIND, predicate);
        tracing::debug!(sql = builder.sql(), "🔢 Contando resultados");

        let (total,) = builder
            .build_query_as::<(i64,)>()
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    async fn find_by_id<E: Entity>(&self, id: i64) -> AppResult<Option<E>> {
        let sql = format!("SELECT * FROM {} WHERE {ID_COLUMN} = $1", E::KIND.table());
        let row = sqlx::query_as::<_, E>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}
