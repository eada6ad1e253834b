use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{optional_text, text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{AddressColumn, Column, EntityKind};

/// Endereço de clientes y pátios
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i64,
    pub postal_code: String,
    pub number: i32,
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub complement: Option<String>,
    pub note: Option<String>,
}

impl Record for Address {
    fn entity(&self) -> EntityKind {
        EntityKind::Address
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Address(column) = column else {
            return None;
        };
        match column {
            AddressColumn::Id => Some(Value::BigInt(self.id)),
            AddressColumn::PostalCode => text(&self.postal_code),
            AddressColumn::Number => Some(Value::Integer(self.number)),
            AddressColumn::Street => text(&self.street),
            AddressColumn::Neighborhood => text(&self.neighborhood),
            AddressColumn::City => text(&self.city),
            AddressColumn::State => text(&self.state),
            AddressColumn::Country => text(&self.country),
            AddressColumn::Complement => optional_text(&self.complement),
            AddressColumn::Note => optional_text(&self.note),
        }
    }
}

impl Entity for Address {
    const KIND: EntityKind = EntityKind::Address;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.addresses
    }
}
