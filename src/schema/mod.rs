//! Esquema estático de entidades
//!
//! Este módulo declara, en tiempo de compilación, qué entidades existen,
//! qué columnas se pueden filtrar en cada una (con su tipo de valor) y
//! por qué relaciones se puede navegar de una entidad a otra.
//!
//! Los filtros sólo pueden referenciar columnas y relaciones declaradas
//! aquí, así que un filtro que apunta a un campo inexistente no compila.

pub mod columns;
pub mod relations;

use serde::Serialize;
use std::fmt;

pub use columns::{
    AddressColumn, BoxColumn, ClientColumn, Column, ContactColumn, TrackingColumn,
    VehicleColumn, YardColumn, ZoneColumn,
};
pub use relations::{JoinPath, Relation};

/// Nombre de la columna de clave primaria, común a todas las tablas
pub const ID_COLUMN: &str = "id";

/// Entidades consultables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Vehicle,
    Client,
    Address,
    Contact,
    Yard,
    Zone,
    ParkingBox,
    Tracking,
}

impl EntityKind {
    pub const ALL: [EntityKind; 8] = [
        EntityKind::Vehicle,
        EntityKind::Client,
        EntityKind::Address,
        EntityKind::Contact,
        EntityKind::Yard,
        EntityKind::Zone,
        EntityKind::ParkingBox,
        EntityKind::Tracking,
    ];

    /// Tabla PostgreSQL de la entidad
    pub const fn table(self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicles",
            EntityKind::Client => "clients",
            EntityKind::Address => "addresses",
            EntityKind::Contact => "contacts",
            EntityKind::Yard => "yards",
            EntityKind::Zone => "zones",
            EntityKind::ParkingBox => "parking_boxes",
            EntityKind::Tracking => "tracking_records",
        }
    }

    /// Columnas declaradas de la entidad, en orden de declaración
    pub fn columns(self) -> Vec<Column> {
        match self {
            EntityKind::Vehicle => VehicleColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::Client => ClientColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::Address => AddressColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::Contact => ContactColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::Yard => YardColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::Zone => ZoneColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::ParkingBox => BoxColumn::ALL.iter().copied().map(Column::from).collect(),
            EntityKind::Tracking => TrackingColumn::ALL.iter().copied().map(Column::from).collect(),
        }
    }

    /// Buscar una columna por su nombre SQL
    pub fn column_named(self, name: &str) -> Option<Column> {
        self.columns().into_iter().find(|column| column.name() == name)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

/// Tipo de valor almacenado en una columna
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    BigInt,
    Integer,
    Text,
    Date,
    Timestamp,
    Decimal,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::BigInt => "bigint",
            ValueKind::Integer => "integer",
            ValueKind::Text => "text",
            ValueKind::Date => "date",
            ValueKind::Timestamp => "timestamp",
            ValueKind::Decimal => "decimal",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_entity_declares_an_id_column() {
        for entity in EntityKind::ALL {
            let id = entity.column_named(ID_COLUMN).expect("id column");
            assert_eq!(id.entity(), entity);
            assert_eq!(id.kind(), ValueKind::BigInt);
        }
    }

    #[test]
    fn column_lookup_is_scoped_to_the_entity() {
        assert_eq!(
            EntityKind::Vehicle.column_named("plate"),
            Some(Column::Vehicle(VehicleColumn::Plate))
        );
        assert_eq!(EntityKind::Client.column_named("plate"), None);
        assert_eq!(EntityKind::Zone.column_named("does_not_exist"), None);
    }
}
