//! Modelo de Client
//!
//! Mapea a la tabla `clients`. El endereço y el contacto son FKs directas.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{text, Entity};
use crate::predicate::{Record, Value};
use crate::repositories::memory_repository::InMemoryFleet;
use crate::schema::{ClientColumn, Column, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Client {
    pub id: i64,
    pub registered_on: NaiveDate,
    pub sex: String,
    pub name: String,
    pub surname: String,
    pub birth_date: NaiveDate,
    pub cpf: String,
    pub profession: String,
    pub marital_status: String,
    pub address_id: i64,
    pub contact_id: i64,
}

impl Record for Client {
    fn entity(&self) -> EntityKind {
        EntityKind::Client
    }

    fn id(&self) -> i64 {
        self.id
    }

    fn value(&self, column: Column) -> Option<Value> {
        let Column::Client(column) = column else {
            return None;
        };
        match column {
            ClientColumn::Id => Some(Value::BigInt(self.id)),
            ClientColumn::RegisteredOn => Some(Value::Date(self.registered_on)),
            ClientColumn::Sex => text(&self.sex),
            ClientColumn::Name => text(&self.name),
            ClientColumn::Surname => text(&self.surname),
            ClientColumn::BirthDate => Some(Value::Date(self.birth_date)),
            ClientColumn::Cpf => text(&self.cpf),
            ClientColumn::Profession => text(&self.profession),
            ClientColumn::MaritalStatus => text(&self.marital_status),
            ClientColumn::AddressId => Some(Value::BigInt(self.address_id)),
            ClientColumn::ContactId => Some(Value::BigInt(self.contact_id)),
        }
    }
}

impl Entity for Client {
    const KIND: EntityKind = EntityKind::Client;

    fn rows_in(fleet: &InMemoryFleet) -> &[Self] {
        &fleet.clients
    }
}
