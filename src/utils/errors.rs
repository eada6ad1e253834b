//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la aplicación y su conversión a
//! respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::config::ConfigError;
use crate::predicate::FilterError;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl AppError {
    /// Código HTTP asociado al error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Filter(FilterError::Validation { .. }) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Filter(FilterError::SchemaMismatch { .. })
            | AppError::Internal(_)
            | AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_response = match self {
            AppError::Database(e) => {
                tracing::error!("❌ Database error: {}", e);
                ErrorResponse {
                    error: "Database Error".to_string(),
                    message: "An error occurred while accessing the database".to_string(),
                    details: Some(json!({ "sql_error": e.to_string() })),
                    code: Some("DB_ERROR".to_string()),
                }
            }

            AppError::Filter(FilterError::Validation { field, message }) => {
                tracing::warn!("⚠️ Invalid filter field `{}`: {}", field, message);
                ErrorResponse {
                    error: "Filter Validation Error".to_string(),
                    message: format!("invalid filter field `{}`: {}", field, message),
                    details: Some(json!({ "field": field })),
                    code: Some("FILTER_VALIDATION_ERROR".to_string()),
                }
            }

            AppError::Filter(e @ FilterError::SchemaMismatch { .. }) => {
                tracing::error!("❌ Filter does not match schema: {}", e);
                ErrorResponse {
                    error: "Schema Mismatch".to_string(),
                    message: "The filter could not be applied to this entity".to_string(),
                    details: Some(json!({ "schema_error": e.to_string() })),
                    code: Some("SCHEMA_MISMATCH".to_string()),
                }
            }

            AppError::NotFound(msg) => {
                tracing::info!("🔍 Resource not found: {}", msg);
                ErrorResponse {
                    error: "Not Found".to_string(),
                    message: msg,
                    details: None,
                    code: Some("NOT_FOUND".to_string()),
                }
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("⚠️ Bad request: {}", msg);
                ErrorResponse {
                    error: "Bad Request".to_string(),
                    message: msg,
                    details: None,
                    code: Some("BAD_REQUEST".to_string()),
                }
            }

            AppError::Internal(msg) => {
                tracing::error!("❌ Internal error: {}", msg);
                ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    message: "An unexpected error occurred".to_string(),
                    details: Some(json!({ "internal_error": msg })),
                    code: Some("INTERNAL_ERROR".to_string()),
                }
            }

            AppError::Configuration(e) => {
                tracing::error!("❌ Configuration error: {}", e);
                ErrorResponse {
                    error: "Configuration Error".to_string(),
                    message: "The server is misconfigured".to_string(),
                    details: None,
                    code: Some("CONFIGURATION_ERROR".to_string()),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

/// Función helper para crear errores de solicitud incorrecta
pub fn bad_request_error(message: &str) -> AppError {
    AppError::BadRequest(message.to_string())
}
