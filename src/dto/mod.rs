//! DTOs de la API

pub mod page_dto;

pub use page_dto::{PageRequest, PageResponse, Pagination, Sort, SortOrder};
