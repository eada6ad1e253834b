use serde::Deserialize;
use validator::Validate;

use super::{ordered, parse_date, text, EntityFilter};
use crate::models::ParkingBox;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{BoxColumn, EntityKind, Relation, VehicleColumn, ZoneColumn};

/// Filtro de boxes
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct BoxFilter {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 1, message = "status is a one-letter code"))]
    pub status: Option<String>,
    pub entry_from: Option<String>,
    pub entry_to: Option<String>,
    pub exit_from: Option<String>,
    pub exit_to: Option<String>,
    pub note: Option<String>,
    pub vehicle_plate: Option<String>,
    pub zone_name: Option<String>,
}

impl EntityFilter for BoxFilter {
    const ROOT: EntityKind = EntityKind::ParkingBox;
    type Row = ParkingBox;

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
            .contains(BoxColumn::Name, text(&self.name))
            .equals(BoxColumn::Status, text(&self.status))
            .range(BoxColumn::EntryDate, entry_from, entry_to)
            .range(BoxColumn::ExitDate, exit_from, exit_to)
            .contains(BoxColumn::Note, text(&self.note))
            .related(Relation::BoxVehicles, |b| {
                b.equals(VehicleColumn::Plate, text(&self.vehicle_plate))
            })
            .related(Relation::BoxZones, |b| {
                b.contains(ZoneColumn::Name, text(&self.zone_name))
            })
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::build_predicate;

    #[test]
    fn status_is_a_single_letter() {
        let filter = BoxFilter {
            status: Some("LL".into()),
            ..Default::default()
        };
        let err = build_predicate(EntityKind::ParkingBox, &filter).unwrap_err();
        assert_eq!(err.field(), Some("status"));

        let filter = BoxFilter {
            status: Some("L".into()),
            zone_name: Some("b".into()),
            ..Default::default()
        };
        assert_eq!(
            build_predicate(EntityKind::ParkingBox, &filter)
                .unwrap()
                .condition_count(),
            2
        );
    }
}
