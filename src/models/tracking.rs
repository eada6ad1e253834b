//! Modelo de TrackingRecord
//!
//! Coordenadas IPS (posicionamiento interno, en metros) y GPS de un
//! registro de rastreo.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Entity;
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{Column, EntityKind, TrackingColumn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TrackingRecord {
    pub id: i64,
    pub ips_x: Decimal,
    pub ips_y: Decimal,
    pub ips_z: Decimal,
    pub gps_latitude: Decimal,
    pub gps_longitude: Decimal,
    pub gps_altitude: Decimal,
    pub recorded_at: NaiveDateTime,
}

impl Record for TrackingRecord {
    fn entity(&self) -> EntityKind {
        EntityKind::Tracking
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Tracking(column) = column else {
            return None;
        };
        let value = match column {
            TrackingColumn::Id => Value::BigInt(self.id),
            TrackingColumn::IpsX => Value::Decimal(self.ips_x),
            TrackingColumn::IpsY => Value::Decimal(self.ips_y),
            TrackingColumn::IpsZ => Value::Decimal(self.ips_z),
            TrackingColumn::GpsLatitude => Value::Decimal(self.gps_latitude),
            TrackingColumn::GpsLongitude => Value::Decimal(self.gps_longitude),
            TrackingColumn::GpsAltitude => Value::Decimal(self.gps_altitude),
            TrackingColumn::RecordedAt => Value::Timestamp(self.recorded_at),
        };
        Some(value)
    }
}

impl Entity for TrackingRecord {
    const KIND: EntityKind = EntityKind::Tracking;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.tracking
    }
}
