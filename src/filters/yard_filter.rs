//! Filtro de pátios

use serde::Deserialize;
use validator::Validate;

use super::{ordered, parse_date, text, EntityFilter};
use crate::models::Yard;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{
    AddressColumn, ContactColumn, EntityKind, Relation, VehicleColumn, YardColumn, ZoneColumn,
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct YardFilter {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub entry_from: Option<String>,
    pub entry_to: Option<String>,
    pub exit_from: Option<String>,
    pub exit_to: Option<String>,
    pub note: Option<String>,
    pub vehicle_plate: Option<String>,
    pub address_city: Option<String>,
    pub contact_email: Option<String>,
    pub zone_name: Option<String>,
}

impl EntityFilter for YardFilter {
    const ROOT: EntityKind = EntityKind::Yard;
    type Row = Yard;

    fn to_predicate(&self) -> Result<Predicate, FilterError> {
        let (entry_from, entry_to) = ordered(
            "entry_from",
            parse_date("entry_from", &self.entry_from)?,
            "entry_to",
            parse_date("entry_to", &self.entry_to)?,
        )?;
        let (exit_from, exit_to) = ordered(
            "exit_from",
            parse_date("exit_from", &self.exit_from)?,
            "exit_to",
            parse_date("exit_to", &self.exit_to)?,
        )?;

        Ok(PredicateBuilder::new(Self::ROOT)
            .contains(YardColumn::Name, text(&self.name))
            .range(YardColumn::EntryDate, entry_from, entry_to)
            .range(YardColumn::ExitDate, exit_from, exit_to)
            .contains(YardColumn::Note, text(&self.note))
            .related(Relation::YardVehicles, |b| {
                b.equals(VehicleColumn::Plate, text(&self.vehicle_plate))
            })
            .related(Relation::YardAddresses, |b| {
                b.contains(AddressColumn::City, text(&self.address_city))
            })
            .related(Relation::YardContacts, |b| {
                b.contains(ContactColumn::Email, text(&self.contact_email))
            })
            .related(Relation::YardZones, |b| {
                b.contains(ZoneColumn::Name, text(&self.zone_name))
            })
            .finish())
    }
}
