use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{Column, EntityKind, ZoneColumn};

/// Zona dentro de un pátio
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Zone {
    pub id: i64,
    pub name: String,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub note: Option<String>,
}

impl Record for Zone {
    fn entity(&self) -> EntityKind {
        EntityKind::Zone
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Zone(column) = column else {
            return None;
        };
        match column {
            ZoneColumn::Id => Some(Value::BigInt(self.id)),
            ZoneColumn::Name => text(&self.name),
            ZoneColumn::EntryDate => Some(Value::Date(self.entry_date)),
            ZoneColumn::ExitDate => Some(Value::Date(self.exit_date)),
            ZoneColumn::Note => optional_text(&self.note),
        }
    }
}

impl Entity for Zone {
    const KIND: EntityKind = EntityKind::Zone;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.zones
    }
}
