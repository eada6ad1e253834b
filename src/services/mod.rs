//! Services module
//!
//! Lógica de búsqueda entre las rutas HTTP y los repositorios.

pub mod search_service;

pub use search_service::SearchService;
