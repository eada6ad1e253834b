use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{BoxColumn, Column, EntityKind};

/// Box (vaga) de estacionamiento. `status` es un código de una letra.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ParkingBox {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub note: Option<String>,
}

impl Record for ParkingBox {
    fn entity(&self) -> EntityKind {
        EntityKind::ParkingBox
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::ParkingBox(column) = column else {
            return None;
        };
        match column {
            BoxColumn::Id => Some(Value::BigInt(self.id)),
            BoxColumn::Name => text(&self.name),
            BoxColumn::Status => text(&self.status),
            BoxColumn::EntryDate => Some(Value::Date(self.entry_date)),
            BoxColumn::ExitDate => Some(Value::Date(self.exit_date)),
            BoxColumn::Note => optional_text(&self.note),
        }
    }
}

impl Entity for ParkingBox {
    const KIND: EntityKind = EntityKind::ParkingBox;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.boxes
    }
}
