use serde::Deserialize;
use validator::Validate;

use super::{parse_int, text, EntityFilter};
use crate::models::Contact;
use crate::predicate::{FilterError, Predicate, PredicateBuilder};
use crate::schema::{ClientColumn, ContactColumn, EntityKind, Relation};

/// Filtro de contatos. `phone` busca en el teléfono principal.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ContactFilter {
    #[validate(length(max = 255))]
    pub email: Option<String>,
    #[validate(regex(path = "crate::filters::DIAL_CODE_REGEX", message = "area code must have 1 to 3 digits"))]
    pub area_code: Option<String>,
    #[validate(regex(path = "crate::filters::DIAL_CODE_REGEX", message = "country code must have 1 to 3 digits"))]
    pub country_code: Option<String>,
    pub phone: Option<String>,
    pub mobile: Option<String>,
    pub note: Option<String>,
    pub client_name: Option<String>,
}

impl EntityFilter for ContactFilter {
    const ROOT: EntityKind = EntityKind::Contact;
    type Row = Contact;

    fn to_predicate(&self) -> Result<Predicate, FilterError> {
        Ok(PredicateBuilder::new(Self::ROOT)
            .contains(ContactColumn::Email, text(&self.email))
            .equals(ContactColumn::AreaCode, parse_int::<i32>("area_code", &self.area_code)?)
            .equals(
                ContactColumn::CountryCode,
                parse_int::<i32>("country_code", &self.country_code)?,
            )
            .contains(ContactColumn::Phone1, text(&self.phone))
            .contains(ContactColumn::Mobile, text(&self.mobile))
            .contains(ContactColumn::Note, text(&self.note))
            .related(Relation::ContactClients, |b| {
                b.contains(ClientColumn::Name, text(&self.client_name))
            })
            .finish())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::build_predicate;
    use crate::predicate::Condition;
    use crate::schema::Column;

    #[test]
    fn phone_searches_primary_number() {
        let filter = ContactFilter {
            phone: Some("3030".into()),
            ..Default::default()
        };
        let predicate = build_predicate(EntityKind::Contact, &filter).unwrap();
        let Predicate::And(clauses) = predicate else {
            panic!("expected conjunction");
        };
        assert_eq!(
            clauses,
            vec![Predicate::Compare {
                column: Column::Contact(ContactColumn::Phone1),
                condition: Condition::Contains("3030".into()),
            }]
        );
    }

    #[test]
    fn area_code_out_of_range() {
        let filter = ContactFilter {
            area_code: Some("1000".into()),
            ..Default::default()
        };
        let err = build_predicate(EntityKind::Contact, &filter).unwrap_err();
        assert_eq!(err.field(), Some("area_code"));

        let filter = ContactFilter {
            country_code: Some("br".into()),
            ..Default::default()
        };
        let err = build_predicate(EntityKind::Contact, &filter).unwrap_err();
        assert_eq!(err.field(), Some("country_code"));
    }
}
