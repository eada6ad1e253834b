use serde::Deserialize;
use validator::Validate;

use super::{parse_int, postal_code, text, EntityFilter};
use crate::models::Address;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{AddressColumn, ClientColumn, EntityKind, Relation};

/// Filtro de endereços
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct AddressFilter {
    #[validate(regex(path = "crate::filters::POSTAL_CODE_REGEX", message = "postal code must be NNNNN-NNN or 8 digits"))]
    pub postal_code: Option<String>,
    pub number: Option<String>,
    pub street: Option<String>,
    pub neighborhood: Option<String>,
    pub city: Option<String>,
    #[validate(regex(path = "crate::filters::STATE_REGEX", message = "state must be a two-letter code"))]
    pub state: Option<String>,
    pub country: Option<String>,
    pub note: Option<String>,
    pub client_name: Option<String>,
}

impl EntityFilter for AddressFilter {
    const ROOT: EntityKind = EntityKind::Address;
    type Row = Address;

    fn to_predicate(&self) -> Result<Predicate, FilterError> {
        Ok(PredicateBuilder::new(Self::ROOT)
            .equals(AddressColumn::PostalCode, postal_code(&self.postal_code))
            .equals(AddressColumn::Number, parse_int::<i32>("number", &self.number)?)
            .contains(AddressColumn::Street, text(&self.street))
            .contains(AddressColumn::Neighborhood, text(&self.neighborhood))
            .contains(AddressColumn::City, text(&self.city))
            .equals(AddressColumn::State, text(&self.state))
            .contains(AddressColumn::Country, text(&self.country))
            .contains(AddressColumn::Note, text(&self.note))
            .related(Relation::AddressClients, |b| {
                b.contains(ClientColumn::Name, text(&self.client_name))
            })
            .finish())
    }
}
