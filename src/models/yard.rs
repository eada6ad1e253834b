//! Modelo de Yard (pátio)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{Column, EntityKind, YardColumn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Yard {
    pub id: i64,
    pub name: String,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub note: Option<String>,
}

impl Record for Yard {
    fn entity(&self) -> EntityKind {
        EntityKind::Yard
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Yard(column) = column else {
            return None;
        };
        match column {
            YardColumn::Id => Some(Value::BigInt(self.id)),
            YardColumn::Name => text(&self.name),
            YardColumn::EntryDate => Some(Value::Date(self.entry_date)),
            YardColumn::ExitDate => Some(Value::Date(self.exit_date)),
            YardColumn::Note => optional_text(&self.note),
        }
    }
}

impl Entity for Yard {
    const KIND: EntityKind = EntityKind::Yard;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.yards
    }
}
