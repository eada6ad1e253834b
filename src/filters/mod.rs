//! Objetos de filtro por entidad
//!
//! Cada filtro es un conjunto disperso de criterios opcionales que llega
//! por query string. `build_predicate` lo valida y lo traduce a un
//! `Predicate` sobre la entidad raíz; si algo falla no se construye nada.
//!
//! Política para textos: un valor vacío o sólo con espacios cuenta como
//! ausente. Los demás valores se usan tal cual, sin recortar.

pub mod address_filter;
pub mod box_filter;
pub mod client_filter;
pub mod contact_filter;
pub mod tracking_filter;
pub mod vehicle_filter;
pub mod yard_filter;
pub mod zone_filter;

use chrono::{NaiveDate, NaiveDateTime};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt::Display;
use std::str::FromStr;
use validator::Validate;

use crate::models::Entity;
use crate::predicate::{FilterError, Predicate};
use crate::schema::EntityKind;

pub use address_filter::AddressFilter;
pub use box_filter::BoxFilter;
pub use client_filter::ClientFilter;
pub use contact_filter::ContactFilter;
pub use tracking_filter::TrackingFilter;
pub use vehicle_filter::VehicleFilter;
pub use yard_filter::YardFilter;
pub use zone_filter::ZoneFilter;

lazy_static! {
    /// CPF con 11 dígitos (vacío se acepta y se trata como ausente)
    pub(crate) static ref CPF_REGEX: Regex = Regex::new(r"^(\s*|\d{11})$").unwrap();
    /// Sigla de estado brasileño
    pub(crate) static ref STATE_REGEX: Regex = Regex::new(r"^(\s*|[A-Za-z]{2})$").unwrap();
    /// CEP con o sin guion
    pub(crate) static ref POSTAL_CODE_REGEX: Regex = Regex::new(r"^(\s*|\d{5}-?\d{3})$").unwrap();
    /// Código de discagem (DDD o DDI) de 1 a 3 dígitos
    pub(crate) static ref DIAL_CODE_REGEX: Regex = Regex::new(r"^(\s*|\d{1,3})$").unwrap();
}

/// Filtro asociado a una entidad raíz
pub trait EntityFilter: Validate {
    /// Entidad que filtra
    const ROOT: EntityKind;

    /// Fila devuelta al ejecutar el filtro
    type Row: Entity;

    /// Traducir los campos presentes a un predicado (sin validar el esquema)
    fn to_predicate(&self) -> Result<Predicate, FilterError>;
}

/// Construir el predicado de `filter` sobre `root`
///
/// Falla con `FilterError::Validation` si un campo está malformado o un
/// rango está invertido, y con `FilterError::SchemaMismatch` si el filtro
/// no corresponde a `root`.
pub fn build_predicate<F: EntityFilter>(root: EntityKind, filter: &F) -> Result<Predicate, FilterError> {
    if root != F::ROOT {
        return Err(FilterError::schema_mismatch(
            root,
            format!("filter for `{}` cannot be applied to `{root}`", F::ROOT),
        ));
    }

    filter.validate()?;
    let predicate = filter.to_predicate()?;
    predicate.check(root)?;
    Ok(predicate)
}

/// Texto presente (no vacío)
pub(crate) fn text(raw: &Option<String>) -> Option<&str> {
    raw.as_deref().filter(|value| !value.trim().is_empty())
}

/// Fecha `YYYY-MM-DD`
pub(crate) fn parse_date(field: &str, raw: &Option<String>) -> Result<Option<NaiveDate>, FilterError> {
    text(raw)
        .map(|value| {
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                FilterError::validation(field, format!("`{value}` is not a date (YYYY-MM-DD)"))
            })
        })
        .transpose()
}

/// Fecha y hora `YYYY-MM-DDTHH:MM:SS` (también con espacio) o sólo fecha
pub(crate) fn parse_timestamp(
    field: &str,
    raw: &Option<String>,
    end_of_day: bool,
) -> Result<Option<NaiveDateTime>, FilterError> {
    let Some(value) = text(raw) else {
        return Ok(None);
    };
    let trimmed = value.trim();

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(Some(parsed));
        }
    }

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|_| {
        FilterError::validation(
            field,
            format!("`{value}` is not a timestamp (YYYY-MM-DDTHH:MM:SS)"),
        )
    })?;
    // El extremo superior cubre el último instante del día
    let time = if end_of_day {
        date.and_hms_nano_opt(23, 59, 59, 999_999_999)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    Ok(time)
}

/// Número entero
pub(crate) fn parse_int<T>(field: &str, raw: &Option<String>) -> Result<Option<T>, FilterError>
where
    T: FromStr,
{
    text(raw)
        .map(|value| {
            value.trim().parse::<T>().map_err(|_| {
                FilterError::validation(field, format!("`{value}` is not an integer"))
            })
        })
        .transpose()
}

/// CEP en la forma almacenada `NNNNN-NNN`
pub(crate) fn postal_code(raw: &Option<String>) -> Option<String> {
    text(raw).map(|value| {
        let digits: String = value.chars().filter(char::is_ascii_digit).collect();
        if digits.len() == 8 {
            format!("{}-{}", &digits[..5], &digits[5..])
        } else {
            value.to_string()
        }
    })
}

/// Número decimal
pub(crate) fn parse_decimal(field: &str, raw: &Option<String>) -> Result<Option<Decimal>, FilterError> {
    text(raw)
        .map(|value| {
            Decimal::from_str(value.trim()).map_err(|_| {
                FilterError::validation(field, format!("`{value}` is not a decimal number"))
            })
        })
        .transpose()
}

/// Rechazar rangos invertidos; el error apunta al extremo inferior
pub(crate) fn ordered<T: PartialOrd + Display>(
    lower_field: &str,
    lower: Option<T>,
    upper_field: &str,
    upper: Option<T>,
) -> Result<(Option<T>, Option<T>), FilterError> {
    if let (Some(l), Some(u)) = (&lower, &upper) {
        if l > u {
            return Err(FilterError::validation(
                lower_field,
                format!("`{lower_field}` ({l}) is after `{upper_field}` ({u})"),
            ));
        }
    }
    Ok((lower, upper))
}
