//! Filtro de clientes
//!
//! Endereço y contato se alcanzan por FK directa; los vehículos por la
//! tabla `client_vehicles`.

use serde::Deserialize;
use validator::Validate;

use super::{ordered, parse_date, text, EntityFilter};
use crate::models::Client;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{
    AddressColumn, ClientColumn, ContactColumn, EntityKind, Relation, VehicleColumn,
};

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClientFilter {
    #[validate(length(max = 100))]
    pub name: Option<String>,
    #[validate(length(max = 100))]
    pub surname: Option<String>,
    #[validate(regex(path = "crate::filters::CPF_REGEX", message = "CPF must have 11 digits"))]
    pub cpf: Option<String>,
    #[validate(length(max = 1))]
    pub sex: Option<String>,
    pub profession: Option<String>,
    pub marital_status: Option<String>,
    pub registered_from: Option<String>,
    pub registered_to: Option<String>,
    pub birth_from: Option<String>,
    pub birth_to: Option<String>,
    pub address_city: Option<String>,
    #[validate(regex(path = "crate::filters::STATE_REGEX", message = "state must be a two-letter code"))]
    pub address_state: Option<String>,
    pub contact_email: Option<String>,
    pub contact_mobile: Option<String>,
    pub vehicle_plate: Option<String>,
    pub vehicle_model: Option<String>,
}

impl EntityFilter for ClientFilter {
    const ROOT: EntityKind = EntityKind::Client;
    type Row = Client;

    fn to_predicate(&self) -> Result<Predicate, FilterError> {
        let (registered_from, registered_to) = ordered(
            "registered_from",
            parse_date("registered_from", &self.registered_from)?,
            "registered_to",
            parse_date("registered_to", &self.registered_to)?,
        )?;
        let (birth_from, birth_to) = ordered(
            "birth_from",
            parse_date("birth_from", &self.birth_from)?,
            "birth_to",
            parse_date("birth_to", &self.birth_to)?,
        )?;

        let predicate = PredicateBuilder::new(Self::ROOT)
            .contains(ClientColumn::Name, text(&self.name))
            .contains(ClientColumn::Surname, text(&self.surname))
            .equals(ClientColumn::Cpf, text(&self.cpf))
            .equals(ClientColumn::Sex, text(&self.sex))
            .contains(ClientColumn::Profession, text(&self.profession))
            .equals(ClientColumn::MaritalStatus, text(&self.marital_status))
            .range(ClientColumn::RegisteredOn, registered_from, registered_to)
            .range(ClientColumn::BirthDate, birth_from, birth_to)
            .related(Relation::ClientAddress, |b| {
                b.contains(AddressColumn::City, text(&self.address_city))
            })
            .related(Relation::ClientAddress, |b| {
                b.equals(AddressColumn::State, text(&self.address_state))
            })
            .related(Relation::ClientContact, |b| {
                b.contains(ContactColumn::Email, text(&self.contact_email))
            })
            .related(Relation::ClientContact, |b| {
                b.contains(ContactColumn::Mobile, text(&self.contact_mobile))
            })
            .related(Relation::ClientVehicles, |b| {
                b.equals(VehicleColumn::Plate, text(&self.vehicle_plate))
            })
            .related(Relation::ClientVehicles, |b| {
                b.contains(VehicleColumn::Model, text(&self.vehicle_model))
            })
            .finish();

        Ok(predicate)
    }
}
