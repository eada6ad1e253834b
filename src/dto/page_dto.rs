//! DTOs de paginación
//!
//! `page` empieza en 0. `sort` tiene la forma `columna[,asc|desc]` y sólo
//! acepta columnas de la entidad consultada.

use serde::{Deserialize, Serialize};

use crate::filters::parse_int;
use crate::predicate::FilterError;
use crate::schema::{Column, EntityKind};

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Parámetros de paginación tal como llegan en la query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageRequest {
    pub page: Option<String>,
    pub size: Option<String>,
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: Column,
    pub order: SortOrder,
}

/// Paginación resuelta contra una entidad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl PageRequest {
    /// Validar los parámetros para `entity`
    pub fn resolve(&self, entity: EntityKind) -> Result<Pagination, FilterError> {
        let page = parse_int::<u32>("page", &self.page)?.unwrap_or(0);
        let size = parse_int::<u32>("size", &self.size)?.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(FilterError::validation(
                "size",
                format!("must be between 1 and {MAX_PAGE_SIZE}"),
            ));
        }

        let sort = match self.sort.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_sort(entity, raw)?),
        };

        Ok(Pagination {
            page,
            size,
            sort,
        })
    }
}

fn parse_sort(entity: EntityKind, raw: &str) -> Result<Sort, FilterError> {
    let (name, order) = match raw.split_once(',') {
        Some((name, order)) => (name.trim(), order.trim()),
        None => (raw, "asc"),
    };

    let column = entity.column_named(name).ok_or_else(|| {
        FilterError::validation("sort", format!("`{name}` is not a column of {entity}"))
    })?;
    let order = match order.to_ascii_lowercase().as_str() {
        "asc" => SortOrder::Asc,
        "desc" => SortOrder::Desc,
        other => {
            return Err(FilterError::validation(
                "sort",
                format!("`{other}` is not a sort direction (asc|desc)"),
            ))
        }
    };

    Ok(Sort { column, order })
}

/// Página de resultados
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> PageResponse<T> {
    pub fn new(content: Vec<T>, pagination: &Pagination, total_elements: i64) -> Self {
        let size = i64::from(pagination.size.max(1));
        Self {
            content,
            page: pagination.page,
            size: pagination.size,
            total_elements,
            total_pages: (total_elements + size - 1) / size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::VehicleColumn;

    #[test]
    fn defaults() {
        let pagination = PageRequest::default().resolve(EntityKind::Vehicle).unwrap();
        assert_eq!(pagination, Pagination::default());
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn sort_by_declared_column() {
        let request = PageRequest {
            page: Some("2".into()),
            size: Some("10".into()),
            sort: Some("year,DESC".into()),
        };
        let pagination = request.resolve(EntityKind::Vehicle).unwrap();
        assert_eq!(pagination.offset(), 20);
        assert_eq!(
            pagination.sort,
            Some(Sort {
                column: VehicleColumn::Year.into(),
                order: SortOrder::Desc,
            })
        );
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let request = PageRequest {
            sort: Some("cpf".into()),
            ..Default::default()
        };
        let err = request.resolve(EntityKind::Vehicle).unwrap_err();
        assert_eq!(err.field(), Some("sort"));
    }

    #[test]
    fn oversized_page() {
        let request = PageRequest {
            size: Some((MAX_PAGE_SIZE + 1).to_string()),
            ..Default::default()
        };
        assert_eq!(
            request.resolve(EntityKind::Zone).unwrap_err().field(),
            Some("size")
        );
    }

    #[test]
    fn malformed_page_names_the_field() {
        let request = PageRequest {
            page: Some("-1".into()),
            size: Some(" ".into()),
            ..Default::default()
        };
        assert_eq!(
            request.resolve(EntityKind::Zone).unwrap_err().field(),
            Some("page")
        );
    }

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination {
            page: 0,
            size: 20,
            sort: None,
        };
        assert_eq!(PageResponse::<()>::new(vec![], &pagination, 41).total_pages, 3);
        assert_eq!(PageResponse::<()>::new(vec![], &pagination, 0).total_pages, 0);
    }
}
