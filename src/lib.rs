//! Búsqueda dinámica sobre la flota de vehículos y los pátios
//!
//! Los filtros por entidad se traducen a un `Predicate` que se ejecuta en
//! PostgreSQL (`EXISTS` para los campos de otras entidades) o en memoria.

pub mod config;
pub mod database;
pub mod dto;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod predicate;
pub mod repositories;
pub mod routes;
pub mod schema;
pub mod services;
pub mod state;
pub mod utils;

pub use filters::{build_predicate, EntityFilter};
pub use predicate::{FilterError, Predicate, PredicateBuilder};
pub use schema::{Column, EntityKind, Relation};
