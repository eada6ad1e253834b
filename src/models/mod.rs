//! Modelos del sistema
//!
//! Este módulo contiene las filas de cada entidad. Mapean exactamente a
//! las tablas de `migrations/` y exponen sus valores al evaluador de
//! predicados en memoria.

pub mod address;
pub mod client;
pub mod contact;
pub mod parking_box;
pub mod tracking;
pub mod vehicle;
pub mod yard;
pub mod zone;

use serde::Serialize;
use sqlx::{postgres::PgRow, FromRow};

use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::EntityKind;

pub use address::Address;
pub use client::Client;
pub use contact::Contact;
pub use parking_box::ParkingBox;
pub use tracking::TrackingRecord;
pub use vehicle::Vehicle;
pub use yard::Yard;
pub use zone::Zone;

/// Fila consultable de una entidad
pub trait Entity:
    Record + Serialize + Clone + for<'r> FromRow<'r, PgRow> + Send + Sync + Unpin + 'static
{
    const KIND: EntityKind;

    /// Colección de esta entidad dentro del almacén en memoria
    fn rows_in(fleet: &InMemoryFleet) -> &[Self];
}

pub(crate) fn text(value: &str) -> Option<Value> {
    Some(Value::Text(value.to_string()))
}

pub(crate) fn optional_text(value: &Option<String>) -> Option<Value> {
    value.as_deref().and_then(text)
}
