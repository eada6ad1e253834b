use crate::schema::EntityKind;
use thiserror::Error;
use validator::ValidationErrors;

/// Errores al construir un predicado a partir de un filtro
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Campo del filtro malformado o contradictorio
    #[error("invalid filter field `{field}`: {message}")]
    Validation { field: String, message: String },

    /// El filtro referencia algo que la entidad raíz no tiene
    #[error("schema mismatch on `{entity}`: {detail}")]
    SchemaMismatch { entity: EntityKind, detail: String },
}

impl FilterError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        FilterError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn schema_mismatch(entity: EntityKind, detail: impl Into<String>) -> Self {
        FilterError::SchemaMismatch {
            entity,
            detail: detail.into(),
        }
    }

    /// Campo del filtro responsable, si es un error de validación
    pub fn field(&self) -> Option<&str> {
        match self {
            FilterError::Validation { field, .. } => Some(field),
            FilterError::SchemaMismatch { .. } => None,
        }
    }
}

impl From<ValidationErrors> for FilterError {
    fn from(errors: ValidationErrors) -> Self {
        // Primer campo en orden alfabético
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(b.0));

        match fields.into_iter().next() {
            Some((field, field_errors)) => {
                let message = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                FilterError::validation(field, message)
            }
            None => FilterError::validation("filter", errors.to_string()),
        }
    }
}
