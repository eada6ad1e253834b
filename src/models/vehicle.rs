//! Modelo de Vehicle
//!
//! Mapea a la tabla `vehicles`.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{Column, EntityKind, VehicleColumn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    pub renavam: String,
    pub chassis: String,
    pub manufacturer: String,
    pub model: String,
    pub engine: Option<String>,
    pub year: i32,
    pub fuel: String,
    pub ble_tag_id: Option<String>,
    pub operational_status: Option<String>,
}

impl Record for Vehicle {
    fn entity(&self) -> EntityKind {
        EntityKind::Vehicle
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Vehicle(column) = column else {
            return None;
        };
        match column {
            VehicleColumn::Id => Some(Value::BigInt(self.id)),
            VehicleColumn::Plate => text(&self.plate),
            VehicleColumn::Renavam => text(&self.renavam),
            VehicleColumn::Chassis => text(&self.chassis),
            VehicleColumn::Manufacturer => text(&self.manufacturer),
            VehicleColumn::Model => text(&self.model),
            VehicleColumn::Engine => optional_text(&self.engine),
            VehicleColumn::Year => Some(Value::Integer(self.year)),
            VehicleColumn::Fuel => text(&self.fuel),
            VehicleColumn::BleTagId => optional_text(&self.ble_tag_id),
            VehicleColumn::Status => optional_text(&self.operational_status),
        }
    }
}

impl Entity for Vehicle {
    const KIND: EntityKind = EntityKind::Vehicle;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.vehicles
    }
}
