//! Filtro de vehículos

use serde::Deserialize;
use validator::Validate;

use super::{ordered, parse_int, text, EntityFilter};
use crate::models::Vehicle;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{
    BoxColumn, ClientColumn, EntityKind, Relation, VehicleColumn, YardColumn, ZoneColumn,
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VehicleFilter {
    #[validate(length(max = 10))]
    pub plate: Option<String>,
    #[validate(length(max = 11))]
    pub renavam: Option<String>,
    #[validate(length(max = 17))]
    pub chassis: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub engine: Option<String>,
    pub year: Option<String>,
    pub year_from: Option<String>,
    pub year_to: Option<String>,
    pub fuel: Option<String>,
    pub ble_tag_id: Option<String>,
    pub status: Option<String>,
    #[validate(regex(path = "crate::filters::CPF_REGEX", message = "CPF must have 11 digits"))]
    pub client_cpf: Option<String>,
    pub box_name: Option<String>,
    pub yard_name: Option<String>,
    pub zone_name: Option<String>,
}

impl EntityFilter for VehicleFilter {
    const ROOT: EntityKind = EntityKind::Vehicle;
    type Row = Vehicle;

    fn to_predicate(&self) -> Result<Predicate, FilterError> {
        let year = parse_int::<i32>("year", &self.year)?;
        let (year_from, year_to) = ordered(
            "year_from",
            parse_int::<i32>("year_from", &self.year_from)?,
            "year_to",
            parse_int::<i32>("year_to", &self.year_to)?,
        )?;

        let predicate = PredicateBuilder::new(Self::ROOT)
            .equals(VehicleColumn::Plate, text(&self.plate))
            .equals(VehicleColumn::Renavam, text(&self.renavam))
            .equals(VehicleColumn::Chassis, text(&self.chassis))
            .contains(VehicleColumn::Manufacturer, text(&self.manufacturer))
            .contains(VehicleColumn::Model, text(&self.model))
            .contains(VehicleColumn::Engine, text(&self.engine))
            .equals(VehicleColumn::Year, year)
            .range(VehicleColumn::Year, year_from, year_to)
            .contains(VehicleColumn::Fuel, text(&self.fuel))
            .equals(VehicleColumn::BleTagId, text(&self.ble_tag_id))
            .equals(VehicleColumn::Status, text(&self.status))
            .related(Relation::VehicleClients, |b| {
                b.equals(ClientColumn::Cpf, text(&self.client_cpf))
            })
            .related(Relation::VehicleBoxes, |b| {
                b.contains(BoxColumn::Name, text(&self.box_name))
            })
            .related(Relation::VehicleYards, |b| {
                b.contains(YardColumn::Name, text(&self.yard_name))
            })
            .related(Relation::VehicleZones, |b| {
                b.contains(ZoneColumn::Name, text(&self.zone_name))
            })
            .finish();

        Ok(predicate)
    }
}
