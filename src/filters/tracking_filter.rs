//! Filtro de registros de rastreo
//!
//! Las coordenadas se comparan por igualdad exacta. Los extremos del
//! intervalo `recorded_*` aceptan fecha sola: `recorded_from` empieza a
//! las 00:00:00 y `recorded_to` termina a las 23:59:59.

use serde::Deserialize;
use validator::Validate;

use super::{ordered, parse_decimal, parse_timestamp, text, EntityFilter};
use crate::models::TrackingRecord;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{EntityKind, Relation, TrackingColumn, VehicleColumn};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct TrackingFilter {
    pub ips_x: Option<String>,
    pub ips_y: Option<String>,
    pub ips_z: Option<String>,
    pub gps_latitude: Option<String>,
    pub gps_longitude: Option<String>,
    pub gps_altitude: Option<String>,
    pub recorded_from: Option<String>,
    pub recorded_to: Option<String>,
    pub vehicle_plate: Option<String>,
}

impl EntityFilter for TrackingFilter {
    const ROOT: EntityKind = EntityKind::Tracking;
    type Row = TrackingRecord;

    fn to_predicate(&self) -> Result<Predicate, FilterError> {
        let (recorded_from, recorded_to) = ordered(
            "recorded_from",
            parse_timestamp("recorded_from", &self.recorded_from, false)?,
            "recorded_to",
            parse_timestamp("recorded_to", &self.recorded_to, true)?,
        )?;

        Ok(PredicateBuilder::new(Self::ROOT)
            .equals(TrackingColumn::IpsX, parse_decimal("ips_x", &self.ips_x)?)
            .equals(TrackingColumn::IpsY, parse_decimal("ips_y", &self.ips_y)?)
            .equals(TrackingColumn::IpsZ, parse_decimal("ips_z", &self.ips_z)?)
            .equals(
                TrackingColumn::GpsLatitude,
                parse_decimal("gps_latitude", &self.gps_latitude)?,
            )
            .equals(
                TrackingColumn::GpsLongitude,
                parse_decimal("gps_longitude", &self.gps_longitude)?,
            )
            .equals(
                TrackingColumn::GpsAltitude,
                parse_decimal("gps_altitude", &self.gps_altitude)?,
            )
            .range(TrackingColumn::RecordedAt, recorded_from, recorded_to)
            .related(Relation::TrackingVehicles, |b| {
                b.equals(VehicleColumn::Plate, text(&self.vehicle_plate))
            })
            .finish())
    }
}
