use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{Column, ContactColumn, EntityKind};

/// Contato de clientes y pátios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Contact {
    pub id: i64,
    pub email: String,
    pub area_code: i32,
    pub country_code: i32,
    pub phone1: String,
    pub phone2: Option<String>,
    pub phone3: Option<String>,
    pub mobile: String,
    pub other: Option<String>,
    pub note: Option<String>,
}

impl Record for Contact {
    fn entity(&self) -> EntityKind {
        EntityKind::Contact
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Contact(column) = column else {
            return None;
        };
        match column {
            ContactColumn::Id => Some(Value::BigInt(self.id)),
            ContactColumn::Email => text(&self.email),
            ContactColumn::AreaCode => Some(Value::Integer(self.area_code)),
            ContactColumn::CountryCode => Some(Value::Integer(self.country_code)),
            ContactColumn::Phone1 => text(&self.phone1),
            ContactColumn::Phone2 => optional_text(&self.phone2),
            ContactColumn::Phone3 => optional_text(&self.phone3),
            ContactColumn::Mobile => text(&self.mobile),
            ContactColumn::Other => optional_text(&self.other),
            ContactColumn::Note => optional_text(&self.note),
        }
    }
}

impl Entity for Contact {
    const KIND: EntityKind = EntityKind::Contact;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.contacts
    }
}
