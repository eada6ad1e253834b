use serde::Deserialize;
use validator::Validate;

use super::{ordered, parse_date, text, EntityFilter};
use crate::models::Zone;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{BoxColumn, EntityKind, Relation, VehicleColumn, YardColumn, ZoneColumn};

/// Filtro de zonas
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ZoneFilter {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    pub entry_from: Option<String>,
    pub entry_to: Option<String>,
    pub exit_from: Option<String>,
    pub exit_to: Option<String>,
    pub note: Option<String>,
    pub box_name: Option<String>,
    pub vehicle_plate: Option<String>,
    pub yard_name: Option<String>,
}

impl EntityFilter for ZoneFilter {
    const ROOT: EntityKind = EntityKind::Zone;
    type Row = Zone;

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
            .contains(ZoneColumn::Name, text(&self.name))
            .range(ZoneColumn::EntryDate, entry_from, entry_to)
            .range(ZoneColumn::ExitDate, exit_from, exit_to)
            .contains(ZoneColumn::Note, text(&self.note))
            .related(Relation::ZoneBoxes, |b| {
                b.contains(BoxColumn::Name, text(&self.box_name))
            })
            .related(Relation::ZoneVehicles, |b| {
                b.equals(VehicleColumn::Plate, text(&self.vehicle_plate))
            })
            .related(Relation::ZoneYards, |b| {
                b.contains(YardColumn::Name, text(&self.yard_name))
            })
            .finish())
    }
}
